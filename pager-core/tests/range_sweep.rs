use pager_core::{ItemKind, Pager, calc_blocks, visible_range};

const MAX_TOTAL: u32 = 40;
const MAX_BLOCK: u32 = 12;

fn valid_inputs() -> impl Iterator<Item = (u32, u32, u32)> {
    (1..=MAX_TOTAL).flat_map(|total| {
        (1..=MAX_BLOCK)
            .flat_map(move |block| (1..=total).map(move |current| (current, total, block)))
    })
}

#[test]
fn visible_range_stays_within_bounds() {
    for (current, total, block) in valid_inputs() {
        let range = visible_range(current, total, block).unwrap();
        assert!(1 <= range.start, "start below 1 for {current}/{total}/{block}");
        assert!(
            range.start <= range.end,
            "inverted range for {current}/{total}/{block}"
        );
        assert!(range.end <= total, "end past total for {current}/{total}/{block}");
        assert!(
            range.len() <= block,
            "range wider than block for {current}/{total}/{block}"
        );
        assert_eq!(range.len(), block.min(total));
        if total >= block {
            assert!(
                range.contains(current),
                "current {current} outside {range:?} (total {total}, block {block})"
            );
        }
    }
}

#[test]
fn calculations_are_pure() {
    for (current, total, block) in valid_inputs() {
        assert_eq!(
            visible_range(current, total, block),
            visible_range(current, total, block)
        );
        assert_eq!(
            calc_blocks(current, total, block),
            calc_blocks(current, total, block)
        );
        let pager = Pager::new(current, total, block).unwrap();
        assert_eq!(pager.layout(), pager.layout());
    }
}

#[test]
fn boundary_predicates_hold() {
    for (current, total, block) in valid_inputs() {
        let pager = Pager::new(current, total, block).unwrap();
        if current == 1 {
            assert!(pager.is_first_page_disabled());
        }
        if current == total {
            assert!(pager.is_next_block_hidden());
        }
    }
}

#[test]
fn layout_matches_predicates() {
    for (current, total, block) in valid_inputs() {
        let pager = Pager::new(current, total, block).unwrap();
        let items = pager.layout();
        assert_eq!(items[0].kind, ItemKind::FirstPage);
        assert_eq!(
            items.iter().any(|item| item.kind == ItemKind::PrevBlock),
            !pager.is_prev_block_hidden()
        );
        assert_eq!(
            items.iter().any(|item| item.kind == ItemKind::NextBlock),
            !pager.is_next_block_hidden()
        );
        assert!(items.iter().filter_map(|item| item.page()).all(|page| page != 1));
        assert!(items.iter().filter(|item| item.active).count() <= 2);
    }
}

#[test]
fn block_targets_stay_in_bounds() {
    for (current, total, block) in valid_inputs() {
        let pager = Pager::new(current, total, block).unwrap();
        let next = pager.next_block_target();
        assert!(next >= current && next <= total);
        if !pager.is_prev_block_hidden() {
            let prev = pager.prev_block_target();
            assert!((2..current).contains(&prev));
        }
    }
}
