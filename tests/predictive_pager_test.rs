//! Predictive decision engine tests against a scripted host.

mod common;

use common::{process, Call, ScriptedHost};
use pagewise::{
    Error, PageId, PagerConfig, PagingPolicy, PredictivePager, ProbabilityModel, ProcessId,
};

fn config() -> PagerConfig {
    PagerConfig::default().with_page_size(4)
}

fn pager() -> PredictivePager {
    PredictivePager::new(config()).unwrap()
}

fn run(pager: &mut PredictivePager, host: &mut ScriptedHost, pcs: &[usize]) {
    for &pc in pcs {
        host.set_pc(0, pc);
        pager.decide_for_all_processes(host).unwrap();
    }
}

#[test]
fn test_fault_evicts_lowest_timestamp() {
    let mut pager = pager();
    let mut host = ScriptedHost::new(vec![process(2, &[])], 2);
    host.occupy(1);
    let proc = ProcessId::new(0);

    pager.decide_for_all_processes(&mut host).unwrap();
    assert_eq!(host.take_calls(), vec![Call::PageIn(0, 0, true)]);
    assert_eq!(pager.last_access(proc, PageId::new(0)), 1);

    host.set_pc(0, 5);
    pager.decide_for_all_processes(&mut host).unwrap();
    assert_eq!(
        host.take_calls(),
        vec![Call::PageIn(0, 1, false), Call::PageOut(0, 0, true)]
    );
    assert_eq!(pager.last_access(proc, PageId::new(1)), 2);
}

#[test]
fn test_no_evidence_means_no_prefetch() {
    let mut pager = pager();
    let mut host = ScriptedHost::new(vec![process(4, &[]), process(4, &[])], 8);

    pager.decide_for_all_processes(&mut host).unwrap();

    assert_eq!(
        host.take_calls(),
        vec![Call::PageIn(0, 0, true), Call::PageIn(1, 0, true)]
    );
    let snap = pager.stats().snapshot();
    assert_eq!(snap.predictions, 0);
    assert_eq!(snap.prefetches, 0);
}

#[test]
fn test_transitions_accumulate() {
    let mut pager = pager();
    let mut host = ScriptedHost::new(vec![process(3, &[])], 8);
    let proc = ProcessId::new(0);

    run(&mut pager, &mut host, &[0, 4, 0, 4, 0, 4]);

    let count = |a, b| pager.transitions().count(proc, PageId::new(a), PageId::new(b));
    assert_eq!(count(0, 1), 3);
    assert_eq!(count(1, 0), 2);
    assert_eq!(count(0, 0), 0);
    assert_eq!(pager.current_page(proc), Some(PageId::new(1)));
}

#[test]
fn test_prefetch_failure_protects_needed_page() {
    let mut pager = pager();
    let mut host = ScriptedHost::new(vec![process(3, &[])], 2);

    // Pages 0, 2, 1, 0: leaves pages 2 (older) and 0 (newer) resident
    run(&mut pager, &mut host, &[0, 8, 4, 0]);
    host.take_calls();

    // Back on page 2, the predictor wants page 1. Page 2 is the oldest
    // resident page but is needed now, so page 0 is evicted instead.
    run(&mut pager, &mut host, &[8]);
    assert_eq!(
        host.take_calls(),
        vec![Call::PageIn(0, 1, false), Call::PageOut(0, 0, true)]
    );
    assert!(host.table[0].pages[2]);
}

#[test]
fn test_prefetch_then_demand_fetch() {
    let mut pager = pager();
    let mut host = ScriptedHost::new(vec![process(3, &[])], 8);

    run(&mut pager, &mut host, &[0, 4, 0]);
    host.take_calls();

    // Both pages dropped by the host; prefetch comes before the demand fetch
    host.table[0].pages = vec![false; 3];
    host.used = 0;
    run(&mut pager, &mut host, &[0]);

    assert_eq!(
        host.take_calls(),
        vec![Call::PageIn(0, 1, true), Call::PageIn(0, 0, true)]
    );
}

#[test]
fn test_resident_pages_make_passes_idempotent() {
    let mut pager = pager();
    let mut host = ScriptedHost::new(vec![process(2, &[])], 4);

    run(&mut pager, &mut host, &[0, 4]);
    host.take_calls();

    for _ in 0..5 {
        pager.decide_for_all_processes(&mut host).unwrap();
        assert!(host.take_calls().is_empty());
    }
    assert_eq!(pager.now(), 8);
}

#[test]
fn test_two_step_horizon_prefetches_further_ahead() {
    let config = config().with_lookahead_steps(2);
    let mut pager = PredictivePager::new(config).unwrap();
    let mut host = ScriptedHost::new(vec![process(3, &[])], 8);

    // Cycle 0 -> 1 -> 2 -> 0
    run(&mut pager, &mut host, &[0, 4, 8]);
    host.table[0].pages = vec![false; 3];
    host.used = 0;
    host.take_calls();

    run(&mut pager, &mut host, &[0]);
    assert_eq!(
        host.take_calls(),
        vec![Call::PageIn(0, 2, true), Call::PageIn(0, 0, true)]
    );
}

#[test]
fn test_approximate_model_predicts() {
    let config = config().with_probability_model(ProbabilityModel::Approximate);
    let mut pager = PredictivePager::new(config).unwrap();
    let mut host = ScriptedHost::new(vec![process(3, &[])], 8);

    run(&mut pager, &mut host, &[0, 4, 0]);

    assert_eq!(
        pager.predict(ProcessId::new(0), PageId::new(0), 3),
        Some(PageId::new(1))
    );
}

#[test]
fn test_refused_eviction_is_fatal() {
    let mut pager = pager();
    let mut host = ScriptedHost::new(vec![process(2, &[0])], 1);
    host.refuse_evictions = true;
    host.set_pc(0, 4);

    assert_eq!(
        pager.decide_for_all_processes(&mut host),
        Err(Error::EvictionFailed {
            proc: ProcessId::new(0),
            page: PageId::new(0),
        })
    );
}

#[test]
fn test_refused_eviction_during_prefetch_is_fatal() {
    let mut pager = pager();
    let mut host = ScriptedHost::new(vec![process(4, &[])], 8);

    // Observe 0 -> 1 -> 0 so page 0 predicts page 1
    run(&mut pager, &mut host, &[0, 4, 0]);

    // Host now holds only pages 2 and 3 and has no free frame
    host.table[0].pages = vec![false, false, true, true];
    host.frames = 2;
    host.used = 2;
    host.refuse_evictions = true;
    host.take_calls();

    host.set_pc(0, 0);
    assert_eq!(
        pager.decide_for_all_processes(&mut host),
        Err(Error::EvictionFailed {
            proc: ProcessId::new(0),
            page: PageId::new(2),
        })
    );

    // The prefetch victim protected page 0, and page 0 was never requested
    assert_eq!(
        host.take_calls(),
        vec![Call::PageIn(0, 1, false), Call::PageOut(0, 2, false)]
    );
}

#[test]
fn test_rejected_pass_changes_nothing() {
    let mut pager = pager();
    let mut host = ScriptedHost::new(vec![process(2, &[]), process(2, &[])], 4);
    let proc = ProcessId::new(0);
    host.set_pc(1, 8);

    for _ in 0..3 {
        assert!(matches!(
            pager.decide_for_all_processes(&mut host),
            Err(Error::PageOutOfRange { .. })
        ));
    }

    assert!(host.take_calls().is_empty());
    assert_eq!(pager.now(), 1);
    assert_eq!(pager.current_page(proc), None);
    assert_eq!(
        pager.transitions().count(proc, PageId::new(0), PageId::new(0)),
        0
    );
    let snap = pager.stats().snapshot();
    assert_eq!(snap.passes, 0);
    assert_eq!(snap.references, 0);
}

#[test]
fn test_rejects_oversized_slot_before_any_decision() {
    let config = config().with_max_pages_per_process(2);
    let mut pager = PredictivePager::new(config).unwrap();
    let mut host = ScriptedHost::new(vec![process(2, &[]), process(3, &[])], 4);

    assert_eq!(
        pager.decide_for_all_processes(&mut host),
        Err(Error::TooManyPages {
            proc: ProcessId::new(1),
            count: 3,
            max: 2,
        })
    );
    assert!(host.take_calls().is_empty());
    assert_eq!(pager.current_page(ProcessId::new(0)), None);
}
