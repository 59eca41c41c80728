#[cfg(test)]
mod tests {
    use crate::charge::{ChargeSet, Polarity};
    use ultraviolet::DVec2;

    #[test]
    fn quick_add_names_follow_list_length() {
        let mut set = ChargeSet::new();
        let a = set.add_unit(true, DVec2::new(590.0, 440.0));
        let b = set.add_unit(false, DVec2::new(590.0, 440.0));
        assert_eq!(set.get(a).unwrap().name, "Charge1");
        assert_eq!(set.get(b).unwrap().name, "Charge2");
        assert_eq!(set.get(a).unwrap().magnitude, 1.0);
        assert_eq!(set.get(b).unwrap().magnitude, -1.0);

        // Names are not unique: deleting and re-adding can repeat one.
        set.remove(a);
        let c = set.add_unit(true, DVec2::zero());
        assert_eq!(set.get(c).unwrap().name, "Charge2");
    }

    #[test]
    fn ids_are_never_reused() {
        let mut set = ChargeSet::new();
        let a = set.push(1.0, DVec2::zero(), "a");
        set.remove(a);
        let b = set.push(1.0, DVec2::zero(), "b");
        assert_ne!(a, b);
        assert!(set.get(a).is_none());
    }

    #[test]
    fn hit_test_prefers_most_recent_charge() {
        let mut set = ChargeSet::new();
        let first = set.push(1.0, DVec2::new(100.0, 100.0), "first");
        let second = set.push(-1.0, DVec2::new(105.0, 100.0), "second");

        assert_eq!(set.hit_test(DVec2::new(102.0, 100.0), 15.0), Some(second));
        assert_eq!(set.hit_test(DVec2::new(88.0, 100.0), 15.0), Some(first));
        assert_eq!(set.hit_test(DVec2::new(300.0, 300.0), 15.0), None);
    }

    #[test]
    fn mutation_by_id() {
        let mut set = ChargeSet::new();
        let id = set.push(2.5, DVec2::new(10.0, 20.0), "q");
        assert!(set.set_position(id, DVec2::new(30.0, 40.0)));
        assert!(set.rename(id, "renamed"));
        assert!(set.set_magnitude(id, 0.0));

        let charge = set.get(id).unwrap();
        assert_eq!(charge.pos, DVec2::new(30.0, 40.0));
        assert_eq!(charge.name, "renamed");
        assert_eq!(charge.polarity(), Polarity::Neutral);

        set.remove(id);
        assert!(!set.set_position(id, DVec2::zero()));
        assert!(set.is_empty());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut set = ChargeSet::new();
        set.push(1.0, DVec2::zero(), "a");
        let b = set.push(1.0, DVec2::zero(), "b");
        set.push(1.0, DVec2::zero(), "c");
        set.remove(b);
        let names: Vec<_> = set.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }
}
