use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use memsim::{FrameTable, MmuError, ReplacementPolicy, VictimRecord};

#[path = "../common/mod.rs"]
mod common;
use common::assert_frame_table_invariants;

fn filled_table(pages: &[u32]) -> Result<FrameTable> {
    let mut table = FrameTable::new(pages.len())?;
    for &page in pages {
        table.allocate(page)?;
    }
    Ok(table)
}

#[test]
fn test_fifo_rotates_through_frames() -> Result<()> {
    let mut table = filled_table(&[1, 2, 3])?;

    // Hits must not change the rotation order
    table.lookup(1);
    table.lookup(3);

    let mut frames = Vec::new();
    for page in 4..8 {
        let victim = table.select_victim(page, ReplacementPolicy::Fifo)?;
        frames.push(victim.frame_id);
    }

    assert_eq!(frames, vec![0, 1, 2, 0]);
    assert_eq!(table.fifo_hand(), 1);
    assert_eq!(table.resident_pages(), vec![7, 5, 6]);

    Ok(())
}

#[test]
fn test_lru_selects_lowest_tick() -> Result<()> {
    let mut table = filled_table(&[10, 11, 12])?;

    table.lookup(10);
    table.lookup(10);
    for _ in 0..4 {
        table.lookup(12);
    }

    let ticks: Vec<_> = table.frames().iter().map(|f| f.last_access_tick).collect();
    assert_eq!(ticks, vec![5, 2, 9]);

    let victim = table.select_victim(13, ReplacementPolicy::Lru)?;
    assert_eq!(victim, VictimRecord { page_number: 11, dirty: false, frame_id: 1 });

    Ok(())
}

#[test]
fn test_clock_gives_second_chance() -> Result<()> {
    let mut table = filled_table(&[1, 2, 3])?;
    assert!(table.frames().iter().all(|f| f.reference_bit));
    assert_eq!(table.clock_hand(), 0);

    // First pass clears every bit, second pass takes the frame the hand started on
    let victim = table.select_victim(4, ReplacementPolicy::Clock)?;
    assert_eq!(victim.frame_id, 0);
    assert_eq!(victim.page_number, 1);
    assert_eq!(table.clock_hand(), 1);

    let bits: Vec<_> = table.frames().iter().map(|f| f.reference_bit).collect();
    assert_eq!(bits, vec![true, false, false]);

    // A hit on page 2 protects it for one sweep
    table.lookup(2);
    let victim = table.select_victim(5, ReplacementPolicy::Clock)?;
    assert_eq!(victim.frame_id, 2);
    assert_eq!(victim.page_number, 3);
    assert_eq!(table.clock_hand(), 0);
    assert!(!table.frames()[1].reference_bit);

    Ok(())
}

#[test]
fn test_dirty_state_reported_on_eviction() -> Result<()> {
    let mut table = filled_table(&[1, 2])?;
    assert_eq!(table.mark_modified(1), Some(0));

    let first = table.select_victim(3, ReplacementPolicy::Fifo)?;
    let second = table.select_victim(4, ReplacementPolicy::Fifo)?;

    assert_eq!(first, VictimRecord { page_number: 1, dirty: true, frame_id: 0 });
    assert_eq!(second, VictimRecord { page_number: 2, dirty: false, frame_id: 1 });

    // Reloaded page starts clean
    let third = table.select_victim(5, ReplacementPolicy::Fifo)?;
    assert_eq!(third, VictimRecord { page_number: 3, dirty: false, frame_id: 0 });

    Ok(())
}

#[test]
fn test_allocate_without_capacity_fails() -> Result<()> {
    let mut table = filled_table(&[1])?;
    assert_eq!(table.allocate(2), Err(MmuError::NoFreeFrame(2)));
    assert_eq!(table.resident_pages(), vec![1]);
    Ok(())
}

#[test]
fn test_random_policy_is_deterministic() -> Result<()> {
    let run = || -> Result<(Vec<VictimRecord>, Vec<u32>)> {
        let mut table = filled_table(&[0, 1, 2, 3])?;
        let mut victims = Vec::new();
        for page in 100..150 {
            if table.lookup(page % 7).is_none() {
                victims.push(table.select_victim(page, ReplacementPolicy::Random)?);
            }
        }
        Ok((victims, table.resident_pages()))
    };

    assert_eq!(run()?, run()?);
    Ok(())
}

#[test]
fn test_reinitialize_replays_random_sequence() -> Result<()> {
    let mut table = FrameTable::with_seed(3, 99)?;
    let mut sequences = Vec::new();

    for _ in 0..2 {
        table.initialize(3)?;
        for page in 0..3 {
            table.allocate(page)?;
        }
        let victims: Vec<_> = (10..30)
            .map(|page| table.select_victim(page, ReplacementPolicy::Random).map(|v| v.frame_id))
            .collect::<Result<_, _>>()?;
        sequences.push(victims);
    }

    assert_eq!(sequences[0], sequences[1]);
    Ok(())
}

#[test]
fn test_invariants_hold_under_mixed_workload() -> Result<()> {
    for policy in ReplacementPolicy::ALL {
        let mut rng = StdRng::seed_from_u64(7);
        let mut table = FrameTable::new(5)?;

        for _ in 0..2000 {
            let page = rng.gen_range(0..12u32);
            let write = rng.gen_bool(0.3);

            if table.lookup(page).is_none() {
                if table.has_free_frame() {
                    table.allocate(page)?;
                } else {
                    table.select_victim(page, policy)?;
                }
            }
            if write {
                assert!(table.mark_modified(page).is_some());
            }

            assert_frame_table_invariants(&table);
            assert!(table.fifo_hand() < table.frame_count());
            assert!(table.clock_hand() < table.frame_count());
        }

        assert_eq!(table.occupied_count(), 5);
    }

    Ok(())
}
