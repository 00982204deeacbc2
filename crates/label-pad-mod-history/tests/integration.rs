// Integration tests for the history store.
//
// These drive long mixed sequences of commits, undos and redos and check the
// store against a naive model after every step.

use label_pad_config::HexColor;
use label_pad_mod_history::{FontSize, HistoryConfig, HistoryStore, Position, Snapshot, TextStyle};

fn fonts() -> Vec<String> {
    vec!["Arial".to_string(), "Verdana".to_string()]
}

fn snap(text: &str, x: f64) -> Snapshot {
    let style = TextStyle::new(HexColor::BLACK, FontSize::new(20).unwrap(), "Arial");
    Snapshot::new(text, style, Position::new(x, 0.0).unwrap(), &fonts()).unwrap()
}

/// Small deterministic generator so the sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) % bound
    }
}

/// Reference model: plain Vec + index, no dedup shortcuts.
struct Model {
    entries: Vec<Snapshot>,
    cursor: usize,
}

impl Model {
    fn commit(&mut self, s: Snapshot) {
        if s == self.entries[self.cursor] {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(s);
        self.cursor = self.entries.len() - 1;
    }
}

// ── Laws ───────────────────────────────────────────────────────────────

#[test]
fn test_store_matches_model_over_random_sequences() {
    for seed in 0..20 {
        let mut rng = Lcg(seed);
        let mut store = HistoryStore::new(snap("seed", 0.0));
        let mut model = Model {
            entries: vec![snap("seed", 0.0)],
            cursor: 0,
        };

        for _ in 0..300 {
            match rng.next(4) {
                0 => {
                    store.undo();
                    model.cursor = model.cursor.saturating_sub(1);
                }
                1 => {
                    store.redo();
                    if model.cursor + 1 < model.entries.len() {
                        model.cursor += 1;
                    }
                }
                _ => {
                    // Few distinct values so identical commits happen often.
                    let s = snap(&format!("t{}", rng.next(3)), rng.next(2) as f64);
                    store.commit(s.clone());
                    model.commit(s);
                }
            }

            assert_eq!(store.entries(), model.entries.as_slice());
            assert_eq!(store.cursor(), model.cursor);
            assert_eq!(store.can_undo(), store.cursor() != 0);
            assert_eq!(store.can_redo(), store.cursor() != store.len() - 1);
        }
    }
}

#[test]
fn test_length_counts_distinct_commits_plus_seed() {
    let mut store = HistoryStore::new(snap("seed", 0.0));
    let inputs = ["a", "a", "b", "b", "b", "a", "c", "c"];
    let mut distinct = 0;
    let mut prev = "seed";
    for text in inputs {
        if text != prev {
            distinct += 1;
        }
        prev = text;
        store.commit(snap(text, 0.0));
    }
    assert_eq!(distinct, 4);
    assert_eq!(store.len(), distinct + 1);
}

#[test]
fn test_repeated_identical_commits_never_grow() {
    let mut store = HistoryStore::new(snap("seed", 0.0));
    for _ in 0..100 {
        assert!(!store.commit(snap("seed", 0.0)));
    }
    assert_eq!(store.len(), 1);
}

#[test]
fn test_undo_redo_round_trip_law() {
    let mut store = HistoryStore::new(snap("seed", 0.0));
    for i in 1..=10 {
        store.commit(snap(&format!("t{i}"), f64::from(i) * 0.5));
    }
    // Walk down, checking the law at every cursor > 0.
    while store.can_undo() {
        let before = store.current().clone();
        store.undo();
        let redone = store.redo().cloned();
        assert_eq!(redone.as_ref(), Some(&before));
        store.undo();
    }
}

#[test]
fn test_commit_after_multiple_undos_disables_redo() {
    let mut store = HistoryStore::new(snap("seed", 0.0));
    for t in ["a", "b", "c", "d"] {
        store.commit(snap(t, 0.0));
    }
    for _ in 0..3 {
        store.undo();
    }
    assert_eq!(store.current().content(), "a");
    store.commit(snap("z", 0.0));
    assert!(!store.can_redo());
    assert_eq!(store.len(), 3);
    assert!(store.redo().is_none());
}

// ── Capacity ───────────────────────────────────────────────────────────

#[test]
fn test_capacity_holds_under_long_sessions() {
    let mut store = HistoryStore::with_config(snap("seed", 0.0), HistoryConfig { max_depth: 8 });
    for i in 0..50 {
        store.commit(snap(&format!("t{i}"), 0.0));
        assert!(store.len() <= 8);
        if i % 7 == 0 {
            store.undo();
        }
    }
    // The newest commits survive eviction.
    assert_eq!(store.entries().last().map(Snapshot::content), Some("t49"));
    assert_eq!(store.current().content(), "t48");
    while store.undo().is_some() {}
    assert_eq!(store.current().content(), "t41");
}
