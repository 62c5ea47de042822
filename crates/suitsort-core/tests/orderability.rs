use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use suitsort_core::model::suit::parse_suits;
use suitsort_core::order::{MAX_ORDERABLE_RUNS, OrderableCache};
use suitsort_core::verify::{all_collapsed, verify_non_recoverable, verify_run_bound};
use suitsort_core::{
    Collapsed, DealBuilder, DealDistribution, DistributionMode, Hand, Orderability,
    ProbabilityError, collapse, moves, orderable, orderable_probability, ordered,
};

fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

#[test]
fn collapse_merges_runs() {
    let hand: Hand = "SSSSSHHHHSSSS".parse().expect("valid hand");
    assert_eq!(hand.collapse().to_string(), "SHS");
}

#[test]
fn ordered_examples() {
    assert!(ordered(&parse_suits("SSSCCC").expect("valid")));
    assert!(!ordered(&parse_suits("SSSCCH").expect("valid")));
}

#[test]
fn moves_of_three_runs() {
    let seq: Collapsed = "CHC".parse().expect("valid");
    let mut outcomes: Vec<String> = moves(&seq).iter().map(ToString::to_string).collect();
    outcomes.sort();
    assert_eq!(outcomes, vec!["CH", "CHC", "HC"]);
}

#[test]
fn collapse_is_idempotent_and_ordered_sees_through_runs() {
    let mut builder = DealBuilder::unpruned();
    let level = builder.distribution(5).expect("in range");
    for (hand, _) in level.iter() {
        let once = hand.collapse();
        assert_eq!(collapse(once.as_slice()), once);
        assert_eq!(ordered(hand.suits()), ordered(once.as_slice()));
        assert_eq!(orderable(hand.suits()), orderable(once.as_slice()));
    }
}

#[test]
fn exact_probabilities_for_small_hands() {
    for n in 1..=4 {
        assert_eq!(orderable_probability(n).expect("in range"), BigRational::one());
    }
    assert_eq!(
        orderable_probability(5).expect("in range"),
        ratio(213_019, 249_900)
    );
    assert_eq!(
        orderable_probability(6).expect("in range"),
        ratio(51_083, 83_895)
    );
}

#[test]
fn pruned_and_unpruned_agree() {
    let mut pruned = Orderability::new(DistributionMode::Pruned);
    let mut unpruned = Orderability::new(DistributionMode::Unpruned);
    for n in 0..=7 {
        let exact = pruned.orderable_probability(n).expect("in range");
        assert_eq!(exact, unpruned.orderable_probability(n).expect("in range"));
        assert_eq!(
            exact,
            pruned
                .builder()
                .level(n)
                .map(DealDistribution::total_probability)
                .expect("level already built"),
            "hand size {n}"
        );
    }
}

#[test]
fn unpruned_distribution_is_complete() {
    let mut builder = DealBuilder::unpruned();
    for n in 0..=7 {
        let level = builder.distribution(n).expect("in range");
        assert_eq!(level.len(), 4usize.pow(n as u32));
        assert_eq!(level.total_probability(), BigRational::one(), "hand size {n}");
    }
}

#[test]
fn pruned_hands_are_all_orderable() {
    let mut builder = DealBuilder::pruned();
    let hands: Vec<Hand> = builder
        .distribution(7)
        .expect("in range")
        .iter()
        .map(|(hand, _)| hand.clone())
        .collect();
    assert_eq!(hands.len(), 6312);
    let mut cache = OrderableCache::new();
    for hand in hands {
        assert!(cache.is_orderable(&hand.collapse()), "hand {hand}");
    }
}

#[test]
fn no_orderable_sequence_beyond_seven_runs() {
    let checked = verify_run_bound(MAX_ORDERABLE_RUNS + 1).expect("bound holds");
    assert_eq!(checked, all_collapsed(MAX_ORDERABLE_RUNS + 1).len());
}

#[test]
fn non_orderable_prefixes_stay_non_orderable() {
    let mut cache = OrderableCache::new();
    let checked = verify_non_recoverable(&mut cache).expect("property holds");
    // 4372 collapsed sequences of length 1..=7, 512 of them orderable
    assert_eq!(checked, 4372 - 512);
}

#[test]
fn probability_never_increases_with_hand_size() {
    let mut engine = Orderability::default();
    let rows = engine.table(0..=8).expect("in range");
    for pair in rows.windows(2) {
        assert!(pair[1].probability <= pair[0].probability);
    }
    assert_eq!(rows[7].probability, ratio(33_606_799, 90_047_300));
    assert_eq!(rows[8].probability, ratio(29_210_911, 144_718_875));
}

#[test]
fn out_of_range_hand_size_fails_fast() {
    let mut engine = Orderability::default();
    assert_eq!(
        engine.orderable_probability(14),
        Err(ProbabilityError::HandSizeOutOfRange {
            requested: 14,
            max: 13
        })
    );
}

#[test]
#[ignore]
fn full_table_up_to_thirteen_cards() {
    let mut engine = Orderability::default();
    let rows = engine.table(1..=13).expect("in range");
    let expected = [
        ratio(1, 1),
        ratio(1, 1),
        ratio(1, 1),
        ratio(1, 1),
        ratio(213_019, 249_900),
        ratio(51_083, 83_895),
        ratio(33_606_799, 90_047_300),
        ratio(29_210_911, 144_718_875),
        ratio(133_194_539, 1_350_709_500),
        ratio(367_755_247, 8_297_215_500),
        ratio(22_673_450_197, 1_219_690_678_500),
        ratio(1_751_664_923, 238_130_084_850),
        ratio(30_785_713_171, 11_112_737_293_000),
    ];
    for (row, want) in rows.iter().zip(expected.iter()) {
        assert_eq!(&row.probability, want, "hand size {}", row.hand_size);
    }
    assert_eq!(
        engine.builder().level(13).map(DealDistribution::len),
        Some(257_020)
    );
}
