use pretty_assertions::assert_eq;
use questlab_patterns::PatternError;
use questlab_patterns::operators::{Bag, Dice, MAX_DICE, MAX_SIDES, Vector2, Wallet};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ── Vector2 ──────────────────────────────────────────────────────

#[test]
fn vector_arithmetic() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(3.0, 4.0);
    assert_eq!(a + b, Vector2::new(4.0, 6.0));
    assert_eq!(b - a, Vector2::new(2.0, 2.0));
    assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(-a, Vector2::new(-1.0, -2.0));

    let mut pos = a;
    pos += b;
    assert_eq!(pos, Vector2::new(4.0, 6.0));
}

#[test]
fn vector_length_and_normalization() {
    let v = Vector2::new(3.0, 4.0);
    assert_eq!(v.length(), 5.0);
    let unit = v.normalized();
    assert!((unit.length() - 1.0).abs() < 1e-12);
    assert!((unit.x - 0.6).abs() < 1e-12);
    assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
    assert_eq!(Vector2::new(0.0, 0.0).distance(v), 5.0);
}

#[test]
fn vector_display() {
    assert_eq!(Vector2::new(1.0, -2.5).to_string(), "(1.0, -2.5)");
}

// ── Bag ──────────────────────────────────────────────────────────

#[test]
fn bag_behaves_like_a_container() {
    let mut bag: Bag<&str> = ["Rope", "Torch"].into_iter().collect();
    assert_eq!(bag.len(), 2);
    assert_eq!(bag[1], "Torch");
    assert!(bag.contains(&"Rope"));
    assert!(!bag.contains(&"Lantern"));

    bag.extend(["Lantern", "Map"]);
    bag.put("Chalk");
    assert_eq!(bag.len(), 5);
    assert_eq!(bag.get(10), None);

    let borrowed: Vec<&&str> = (&bag).into_iter().collect();
    assert_eq!(borrowed.len(), 5);
    let owned: Vec<&str> = bag.into_iter().collect();
    assert_eq!(owned, vec!["Rope", "Torch", "Lantern", "Map", "Chalk"]);
}

#[test]
#[should_panic]
fn bag_index_out_of_bounds_panics() {
    let bag: Bag<u32> = Bag::new();
    let _first = bag[0];
}

// ── Dice ─────────────────────────────────────────────────────────

#[test]
fn dice_notation_parses() {
    let dice: Dice = "2d6".parse().unwrap();
    assert_eq!(dice.to_string(), "2d6");
    assert_eq!((dice.min(), dice.max()), (2, 12));
    assert_eq!("d20".parse::<Dice>().unwrap(), Dice::new(1, 20).unwrap());
    assert_eq!(" 3D8 ".parse::<Dice>().unwrap().to_string(), "3d8");
}

#[test]
fn bad_dice_notation_is_an_error() {
    for bad in ["", "abc", "0d6", "2d0", "2d", "xd6"] {
        assert_eq!(
            bad.parse::<Dice>(),
            Err(PatternError::InvalidDice(bad.to_string())),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn seeded_rolls_stay_in_range_and_repeat() {
    let dice = Dice::new(3, 6).unwrap();
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let roll = dice.roll(&mut a);
        assert!((3..=18).contains(&roll));
        assert_eq!(roll, dice.roll(&mut b));
    }
}

#[test]
fn oversized_dice_are_rejected() {
    for huge in ["100000d100000", "3d4294967295", "101d6", "2d1001"] {
        assert_eq!(
            huge.parse::<Dice>(),
            Err(PatternError::InvalidDice(huge.to_string())),
        );
    }
    assert!(Dice::new(MAX_DICE + 1, 6).is_err());
}

#[test]
fn largest_dice_roll_without_overflow() {
    let dice = Dice::new(MAX_DICE, MAX_SIDES).unwrap();
    assert_eq!(dice.max(), MAX_DICE * MAX_SIDES);
    let roll = dice.roll(&mut StdRng::seed_from_u64(1));
    assert!((dice.min()..=dice.max()).contains(&roll));
}

// ── Transaction ──────────────────────────────────────────────────

#[test]
fn dropped_transaction_rolls_back() {
    let mut wallet = Wallet::new(100);
    {
        let mut tx = wallet.begin();
        tx.spend(30).unwrap();
        tx.earn(5);
        assert_eq!(tx.balance(), 75);
    }
    assert_eq!(wallet.gold, 100);
}

#[test]
fn committed_transaction_keeps_changes() {
    let mut wallet = Wallet::new(100);
    let mut tx = wallet.begin();
    tx.spend(30).unwrap();
    tx.commit();
    assert_eq!(wallet.gold, 70);
}

#[test]
fn overspending_fails_without_changing_balance() {
    let mut wallet = Wallet::new(10);
    let mut tx = wallet.begin();
    assert_eq!(
        tx.spend(25),
        Err(PatternError::InsufficientGold {
            needed: 25,
            available: 10
        })
    );
    assert_eq!(tx.balance(), 10);
}

#[test]
fn error_inside_transaction_rolls_everything_back() {
    fn buy_both(wallet: &mut Wallet) -> questlab_patterns::PatternResult<()> {
        let mut tx = wallet.begin();
        tx.spend(40)?;
        tx.spend(40)?;
        tx.commit();
        Ok(())
    }

    let mut wallet = Wallet::new(60);
    assert!(buy_both(&mut wallet).is_err());
    assert_eq!(wallet.gold, 60);
}
