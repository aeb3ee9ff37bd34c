// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::time::Duration;

use lattice_hinting_exports::{HintingConfig, Ledger};
use lattice_metrics::StatDetail;
use lattice_models::test_exports::create_block;
use lattice_models::{Amount, BlockHash};
use lattice_time::LatticeTime;
use serial_test::serial;

use super::tools::{wait_until, TestChannels};
use crate::start_hinting_worker;

#[test]
fn test_capacity_is_respected() {
    let test = TestChannels::new(3);
    for nonce in 0..10u64 {
        let block = test
            .ledger
            .add_block(create_block(BlockHash::ZERO, BlockHash::ZERO, nonce));
        test.vote_cache
            .set(block.hash(), Amount::from_raw(100 + nonce as u128), Amount::zero());
    }

    let mut thread = test.thread(HintingConfig::default());
    thread.run_iterative();

    assert_eq!(test.elections.inserted().len(), 3);
    assert!(test.elections.vacancy_at_insert().iter().all(|v| *v > 0));
    // the loop stopped pulling candidates once the set was full
    assert_eq!(test.count(StatDetail::ActivateNormal), 3);
}

#[test]
fn test_vacancy_reopened_between_iterations() {
    let test = TestChannels::new(1);
    let high = test
        .ledger
        .add_block(create_block(BlockHash::ZERO, BlockHash::ZERO, 1));
    let low = test
        .ledger
        .add_block(create_block(BlockHash::ZERO, BlockHash::ZERO, 2));
    test.vote_cache
        .set(high.hash(), Amount::from_raw(200), Amount::zero());
    test.vote_cache
        .set(low.hash(), Amount::from_raw(100), Amount::zero());

    let mut thread = test.thread(HintingConfig::default());
    thread.run_iterative();
    assert_eq!(test.elections.inserted(), vec![high.hash()]);

    // `low` was never claimed, so it is picked up as soon as there is room
    test.elections.set_capacity(2);
    thread.run_iterative();
    assert_eq!(test.elections.inserted(), vec![high.hash(), low.hash()]);
    assert_eq!(test.count(StatDetail::ActivateNormal), 2);
}

#[test]
fn test_highest_tallies_are_activated_first() {
    let test = TestChannels::new(2);
    let mut hashes = Vec::new();
    for nonce in 0..4u64 {
        let block = test
            .ledger
            .add_block(create_block(BlockHash::ZERO, BlockHash::ZERO, nonce));
        test.vote_cache
            .set(block.hash(), Amount::from_raw(10 * (nonce as u128 + 1)), Amount::zero());
        hashes.push(block.hash());
    }

    let mut thread = test.thread(HintingConfig::default());
    thread.run_iterative();

    assert_eq!(test.elections.inserted(), vec![hashes[3], hashes[2]]);
}

#[test]
fn test_inserted_blocks_have_confirmed_dependencies() {
    let test = TestChannels::new(100);
    // two account chains, the second receiving from the first
    let a1 = test
        .ledger
        .add_confirmed_block(create_block(BlockHash::ZERO, BlockHash::ZERO, 1));
    let a2 = test.ledger.add_block(create_block(a1.hash(), BlockHash::ZERO, 2));
    let a3 = test.ledger.add_block(create_block(a2.hash(), BlockHash::ZERO, 3));
    let b1 = test.ledger.add_block(create_block(BlockHash::ZERO, a3.hash(), 4));
    let b2 = test.ledger.add_block(create_block(b1.hash(), BlockHash::ZERO, 5));
    test.vote_cache
        .set(b2.hash(), Amount::from_raw(100), Amount::zero());

    let mut thread = test.thread(HintingConfig::default());
    thread.run_iterative();

    let inserted = test.elections.inserted();
    assert_eq!(inserted, vec![a2.hash()]);
    let tx = test.ledger.tx_begin_read();
    for hash in inserted {
        let block = tx.block(&hash).unwrap();
        assert!(tx.dependents_confirmed(&block));
    }
}

#[test]
fn test_final_tier_bypasses_dependency_check() {
    let test = TestChannels::new(10);
    let parent = test
        .ledger
        .add_block(create_block(BlockHash::ZERO, BlockHash::ZERO, 1));
    let child = test
        .ledger
        .add_block(create_block(parent.hash(), BlockHash::ZERO, 2));
    test.vote_cache
        .set(child.hash(), Amount::from_raw(1000), Amount::from_raw(1000));

    let mut thread = test.thread(HintingConfig::default());
    thread.run_iterative();

    // the unconfirmed parent was never looked at
    assert_eq!(test.elections.inserted(), vec![child.hash()]);
    assert_eq!(test.count(StatDetail::DependentUnconfirmed), 0);
}

#[test]
fn test_rewalk_after_confirmation_activates_directly() {
    let test = TestChannels::new(10);
    let c = test
        .ledger
        .add_block(create_block(BlockHash::ZERO, BlockHash::ZERO, 1));
    let b = test.ledger.add_block(create_block(c.hash(), BlockHash::ZERO, 2));
    test.vote_cache
        .set(b.hash(), Amount::from_raw(100), Amount::zero());

    let config = HintingConfig {
        block_cooldown: LatticeTime::from_millis(1),
        ..Default::default()
    };
    let mut thread = test.thread(config);
    thread.run_iterative();
    assert_eq!(test.elections.inserted(), vec![c.hash()]);
    assert_eq!(test.count(StatDetail::DependentUnconfirmed), 1);

    test.ledger.confirm(c.hash());
    std::thread::sleep(Duration::from_millis(10));
    thread.run_iterative();

    assert_eq!(test.elections.inserted(), vec![c.hash(), b.hash()]);
    assert_eq!(test.count(StatDetail::DependentUnconfirmed), 1);
}

#[test]
fn test_one_read_transaction_per_iteration() {
    let test = TestChannels::new(10);
    for nonce in 0..5u64 {
        let block = test
            .ledger
            .add_block(create_block(BlockHash::ZERO, BlockHash::ZERO, nonce));
        test.vote_cache
            .set(block.hash(), Amount::from_raw(1000), Amount::from_raw(1000));
    }

    let mut thread = test.thread(HintingConfig::default());
    thread.run_iterative();
    thread.run_iterative();

    assert_eq!(test.ledger.read_transaction_count(), 2);
}

#[test]
#[serial]
fn test_worker_hints_blocks_and_stops() {
    let test = TestChannels::new(10);
    let config = HintingConfig {
        vote_cache_check_interval: LatticeTime::from_millis(20),
        ..Default::default()
    };
    let (mut manager, _controller) = start_hinting_worker(config, test.channels());

    let block = test
        .ledger
        .add_block(create_block(BlockHash::ZERO, BlockHash::ZERO, 1));
    test.vote_cache
        .set(block.hash(), Amount::from_raw(100), Amount::zero());

    assert!(wait_until(Duration::from_secs(5), || !test
        .elections
        .inserted()
        .is_empty()));
    manager.stop();
    // stopping twice is harmless
    manager.stop();

    assert_eq!(test.elections.inserted(), vec![block.hash()]);
    let loops = test.count(StatDetail::Loop);
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(test.count(StatDetail::Loop), loops);
}

#[test]
#[serial]
fn test_notify_wakes_worker_early() {
    let test = TestChannels::new(10);
    let config = HintingConfig {
        vote_cache_check_interval: LatticeTime::from_millis(60_000),
        ..Default::default()
    };
    let (mut manager, controller) = start_hinting_worker(config, test.channels());

    let block = test
        .ledger
        .add_block(create_block(BlockHash::ZERO, BlockHash::ZERO, 1));
    test.vote_cache
        .set(block.hash(), Amount::from_raw(100), Amount::zero());
    controller.clone_box().notify();

    assert!(wait_until(Duration::from_secs(5), || !test
        .elections
        .inserted()
        .is_empty()));
    manager.stop();
}

#[test]
#[serial]
fn test_stop_interrupts_long_wait() {
    let test = TestChannels::new(10);
    let config = HintingConfig {
        vote_cache_check_interval: LatticeTime::from_millis(60_000),
        ..Default::default()
    };
    let (mut manager, _controller) = start_hinting_worker(config, test.channels());
    assert!(wait_until(Duration::from_secs(5), || test
        .count(StatDetail::Loop)
        >= 1));

    let start = std::time::Instant::now();
    manager.stop();
    assert!(start.elapsed() < Duration::from_secs(5));
}
