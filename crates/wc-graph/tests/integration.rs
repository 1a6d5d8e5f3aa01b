//! Integration tests for wc-graph.

use proptest::prelude::*;
use wc_core::{TerminalRule, normalize};
use wc_graph::{GraphBuilder, build_graph};

#[test]
fn build_closed_cycle() {
    // к -> т -> р -> к
    let graph = build_graph(["кот", "топор", "рак"]).unwrap();

    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.vertices(), &['к', 'т', 'р']);

    for &v in graph.vertices() {
        assert_eq!(graph.out_degree(v), 1);
        assert_eq!(graph.in_degree(v), 1);
    }

    assert_eq!(graph.neighbors('к'), &['т']);
    assert_eq!(graph.neighbors('т'), &['р']);
    assert_eq!(graph.neighbors('р'), &['к']);
    assert!(graph.check_degrees().is_ok());
}

#[test]
fn adjacency_keeps_word_order() {
    let graph = build_graph(["арбуз", "аист", "акула", "ананас"]).unwrap();
    assert_eq!(graph.neighbors('а'), &['з', 'т', 'а', 'с']);
    assert_eq!(graph.out_degree('а'), 4);
    assert_eq!(graph.in_degree('а'), 1);
}

#[test]
fn buckets_follow_transitions() {
    let graph = build_graph(["кот", "кит", "тук"]).unwrap();
    let index = graph.edge_index();

    let kt: Vec<_> = index
        .bucket('к', 'т')
        .map(|id| graph.word(id).unwrap())
        .collect();
    assert_eq!(kt, vec!["кот", "кит"]);
    assert_eq!(index.bucket_len('т', 'к'), 1);
    assert_eq!(index.remaining(), 3);
}

#[test]
fn incremental_and_one_shot_agree() {
    let words = ["лось", "слон", "нос"];
    let one_shot = build_graph(words).unwrap();

    let mut builder = GraphBuilder::with_rule(TerminalRule::default());
    for w in words {
        builder.add_word(w).unwrap();
    }
    let incremental = builder.build().unwrap();

    assert_eq!(one_shot.vertices(), incremental.vertices());
    for &v in one_shot.vertices() {
        assert_eq!(one_shot.neighbors(v), incremental.neighbors(v));
    }
}

#[test]
fn empty_input_builds_empty_graph() {
    let graph = build_graph(Vec::<&str>::new()).unwrap();
    assert!(graph.is_empty());
    assert!(graph.vertices().is_empty());
    assert!(graph.edge_index().is_exhausted());
}

proptest! {
    #[test]
    fn degree_sums_equal_word_count(words in prop::collection::vec("[а-е]{1,5}ь?", 0..30)) {
        let graph = build_graph(words.clone()).unwrap();

        let out_total: usize = graph.vertices().iter().map(|&v| graph.out_degree(v)).sum();
        let in_total: usize = graph.vertices().iter().map(|&v| graph.in_degree(v)).sum();
        prop_assert_eq!(out_total, words.len());
        prop_assert_eq!(in_total, words.len());
        prop_assert_eq!(graph.edge_index().remaining(), words.len());
    }

    #[test]
    fn every_word_in_its_bucket(words in prop::collection::vec("[а-е]{1,5}ь?", 1..30)) {
        let graph = build_graph(words.clone()).unwrap();

        for (bucket, ids) in graph.edge_index().iter() {
            for &id in ids {
                let word = graph.word(id).unwrap();
                prop_assert_eq!(normalize(word).unwrap(), bucket);
            }
        }
    }
}
