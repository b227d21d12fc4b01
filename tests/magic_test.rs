use uttt_tables::board::*;
use uttt_tables::magic::config::*;
use uttt_tables::magic::*;

mod common;

#[test]
fn accepts_first_perfect_candidate() {
    common::setup();
    let keys = encoded_boards();
    // 0 sends everything to slot 0, 2 drops the top key bit
    let res = MagicSearch::new(18).run(&keys, vec![0, 2, 4, 536887361, 1]);
    assert_eq!(
        res,
        Ok(MagicResult {
            magic: 536887361,
            attempts: 4
        })
    );
}

#[test]
fn accepted_magic_is_injective() {
    common::setup();
    let keys = encoded_boards();
    let res = MagicSearch::new(18).run(&keys, vec![6, 3]).unwrap();
    let mut slots: Vec<usize> = keys.iter().map(|&k| slot(k, res.magic, 18)).collect();
    slots.sort_unstable();
    slots.dedup();
    assert_eq!(slots.len(), N_BOARDS);
    assert!(slots.iter().all(|&s| s < 1 << 18));
}

#[test]
fn runs_out_of_candidates() {
    common::setup();
    let keys = encoded_boards();
    let res = MagicSearch::new(18).run(&keys, vec![0, 2, 8]);
    assert_eq!(res, Err(SearchError::CandidatesExhausted { attempts: 3 }));
}

#[test]
fn respects_attempt_cap() {
    common::setup();
    let keys = encoded_boards();
    let res = MagicSearch::new(18)
        .with_max_attempts(2)
        .run(&keys, std::iter::repeat(0));
    assert_eq!(res, Err(SearchError::AttemptsExhausted { attempts: 2 }));
}

#[test]
fn cap_reported_when_source_ends_with_it() {
    common::setup();
    let keys = encoded_boards();
    let res = MagicSearch::new(18).with_max_attempts(3).run(&keys, vec![0, 2, 8]);
    assert_eq!(res, Err(SearchError::AttemptsExhausted { attempts: 3 }));
    let res = MagicSearch::new(18).with_max_attempts(0).run(&keys, vec![1]);
    assert_eq!(res, Err(SearchError::AttemptsExhausted { attempts: 0 }));
}

#[test]
fn default_table_is_unseparable() {
    common::setup();
    let keys = encoded_boards();
    match MagicSearch::default().run(&keys, std::iter::repeat(1)) {
        Err(SearchError::Unseparable {
            first,
            second,
            slot_bits,
        }) => {
            assert_eq!(slot_bits, SLOT_BITS);
            assert_eq!(first ^ second, 1 << 17);
            assert_eq!(decode(first)[..8], decode(second)[..8]);
        }
        other => panic!("expected Unseparable, got {:?}", other),
    }
}

#[test]
fn seeded_search_finds_magic() {
    common::setup();
    let search = MagicSearch::new(18).with_max_attempts(1000);
    let res = find_magic(&search, SAMPLES_PER_CANDIDATE, Some(42)).unwrap();
    assert!(res.magic <= SAMPLE_MAX);
    assert_eq!(res.magic % 2, 1);
    assert!(is_perfect(&encoded_boards(), res.magic, 18));

    let again = find_magic(&search, SAMPLES_PER_CANDIDATE, Some(42)).unwrap();
    assert_eq!(res, again);
}
