//! Long add / remove / reorder sequences
//!
//! After every step the collection must be in display order with `order`
//! values exactly `0..N-1`.

use sitebuilder_editor::{Builder, MemoryStore, Mutation};
use sitebuilder_model::{SectionIdGenerator, SectionType};

/// Small deterministic generator so failures are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound.max(1)
    }
}

fn assert_permutation(builder: &Builder<MemoryStore>) {
    let mut orders: Vec<u32> = builder.sections().iter().map(|s| s.order).collect();
    orders.sort_unstable();
    let expected: Vec<u32> = (0..builder.len() as u32).collect();
    assert_eq!(orders, expected);
}

fn random_mutation(rng: &mut Lcg, builder: &Builder<MemoryStore>) -> Mutation {
    let ids: Vec<String> = builder.sections().iter().map(|s| s.id.clone()).collect();
    let pick = |rng: &mut Lcg| {
        // occasionally aim at an id that does not exist
        if ids.is_empty() || rng.next(10) == 0 {
            "missing".to_string()
        } else {
            ids[rng.next(ids.len())].clone()
        }
    };

    match rng.next(3) {
        0 => Mutation::AddSection {
            section_type: SectionType::ALL[rng.next(SectionType::ALL.len())],
        },
        1 => Mutation::RemoveSection { section_id: pick(rng) },
        _ => Mutation::MoveSection {
            source_id: pick(rng),
            target_id: pick(rng),
        },
    }
}

#[test]
fn test_orders_stay_contiguous() {
    for seed in 0..20 {
        let mut rng = Lcg(seed);
        let mut builder =
            Builder::new(MemoryStore::new()).with_id_generator(SectionIdGenerator::from_seed("seq"));

        for _ in 0..200 {
            let mutation = random_mutation(&mut rng, &builder);
            builder.apply(mutation).unwrap();
            assert_permutation(&builder);
        }
    }
}

#[test]
fn test_orders_recover_after_gapped_import() {
    let mut builder = Builder::new(MemoryStore::new());
    builder
        .import_json(
            r#"{"sections": [
                { "id": "a", "type": "hero", "order": 10 },
                { "id": "b", "type": "about", "order": 3 },
                { "id": "c", "type": "footer", "order": 7 }
            ]}"#,
        )
        .unwrap();

    builder.remove("b").unwrap();
    assert_permutation(&builder);
    let ids: Vec<&str> = builder.ordered().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a"]);
}

#[test]
fn test_move_then_remove_chain() {
    let mut builder =
        Builder::new(MemoryStore::new()).with_id_generator(SectionIdGenerator::from_seed("chain"));
    let ids: Vec<String> = SectionType::ALL
        .iter()
        .map(|t| builder.add_section(*t).unwrap().id.clone())
        .collect();

    // footer to the top, then header to the bottom
    builder.reorder(&ids[5], &ids[0]).unwrap();
    builder.reorder(&ids[0], &ids[4]).unwrap();
    builder.remove(&ids[2]).unwrap();

    let order: Vec<&str> = builder.ordered().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(order, vec![ids[5].as_str(), ids[1].as_str(), ids[3].as_str(), ids[4].as_str(), ids[0].as_str()]);
    assert_permutation(&builder);
}

#[test]
fn test_reorder_same_id_keeps_orders() {
    let mut builder =
        Builder::new(MemoryStore::new()).with_id_generator(SectionIdGenerator::from_seed("same"));
    for t in SectionType::ALL {
        builder.add_section(t).unwrap();
    }
    let before = builder.sections().to_vec();

    for section in before.clone() {
        assert!(!builder.reorder(&section.id, &section.id).unwrap());
    }
    assert_eq!(builder.sections(), before.as_slice());
}
