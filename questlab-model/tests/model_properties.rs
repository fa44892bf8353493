//! Property-based tests for the range constraints of the toy domain:
//! - health clamps to `[0, max_health]`
//! - an inventory never exceeds its capacity
//! - a quest pays out its reward exactly once

use proptest::prelude::*;
use questlab_model::{Health, Inventory, Item, Quest, QuestProgress};

proptest! {
    #[test]
    fn damage_is_saturating_subtraction(max in 0u32..10_000, start in 0u32..10_000, d in any::<u32>()) {
        let mut h = Health::with_current(start, max);
        let before = h.current();
        h.damage(d);
        prop_assert_eq!(h.current(), before.saturating_sub(d));
    }

    #[test]
    fn heal_is_capped_addition(max in 0u32..10_000, start in 0u32..10_000, a in any::<u32>()) {
        let mut h = Health::with_current(start, max);
        let before = h.current();
        h.heal(a);
        prop_assert_eq!(h.current(), (u64::from(before) + u64::from(a)).min(u64::from(max)) as u32);
    }

    #[test]
    fn health_stays_in_range(max in 1u32..1_000, ops in prop::collection::vec((any::<bool>(), 0u32..500), 0..50)) {
        let mut h = Health::new(max);
        for (is_damage, amount) in ops {
            if is_damage { h.damage(amount); } else { h.heal(amount); }
            prop_assert!(h.current() <= h.max());
        }
    }

    #[test]
    fn inventory_never_exceeds_capacity(capacity in 0usize..16, adds in 0usize..40) {
        let mut inv = Inventory::with_capacity(capacity);
        let mut accepted = 0;
        for n in 0..adds {
            let before = inv.clone();
            match inv.add(Item::misc(format!("item-{n}"), 1)) {
                Ok(()) => accepted += 1,
                Err(_) => prop_assert_eq!(&inv, &before),
            }
            prop_assert!(inv.len() <= capacity);
        }
        prop_assert_eq!(accepted, adds.min(capacity));
    }

    #[test]
    fn quest_reward_paid_once(target in 1u32..20, steps in prop::collection::vec(0u32..6, 0..60)) {
        let mut quest = Quest::new("Prop quest", target, 7);
        quest.accept();
        let mut completions = 0;
        let mut total: u32 = 0;
        for step in steps {
            total = total.saturating_add(step);
            if let QuestProgress::Completed { reward } = quest.advance(step) {
                prop_assert_eq!(reward, 7);
                completions += 1;
            }
        }
        prop_assert_eq!(completions, u32::from(total >= target));
        prop_assert!(quest.progress() <= quest.target());
    }
}
