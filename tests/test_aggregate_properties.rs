use proptest::prelude::*;
use recipe_cart::{aggregate, parse_quantity, Recipe, Selection};

fn ingredient_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Flour", "flour", "Salt", "Egg", "Milk ", "Butter"])
        .prop_map(str::to_string)
}

fn quantity() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..1000).prop_map(|n| format!("{}.5", n)),
        (1u32..10).prop_map(|n| format!("{} cups", n)),
        Just(String::new()),
        Just("abc".to_string()),
        Just("pinch".to_string()),
    ]
}

fn recipe() -> impl Strategy<Value = Recipe> {
    (
        prop::sample::select(vec!["1", "2", "3", "4", "5"]),
        prop::collection::vec((ingredient_name(), quantity()), 0..6),
    )
        .prop_map(|(id, ingredients)| {
            ingredients
                .into_iter()
                .fold(Recipe::new(id, format!("Recipe {}", id)), |r, (n, q)| {
                    r.with_ingredient(n, q)
                })
        })
}

proptest! {
    #[test]
    fn selection_never_holds_duplicate_ids(recipes in prop::collection::vec(recipe(), 0..20)) {
        let mut selection = Selection::new();
        for recipe in recipes {
            selection.add(recipe);
        }

        let mut ids: Vec<&str> = selection.iter().map(|r| r.id.as_str()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    #[test]
    fn adding_twice_equals_adding_once(base in prop::collection::vec(recipe(), 0..8), extra in recipe()) {
        let mut once = Selection::new();
        let mut twice = Selection::new();
        for recipe in base {
            once.add(recipe.clone());
            twice.add(recipe);
        }
        once.add(extra.clone());
        twice.add(extra.clone());
        twice.add(extra);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn totals_match_per_name_sums(recipes in prop::collection::vec(recipe(), 0..8)) {
        let mut selection = Selection::new();
        for recipe in recipes {
            selection.add(recipe);
        }
        let totals = selection.aggregate();

        let mut names: Vec<&str> = Vec::new();
        for recipe in &selection {
            for ingredient in &recipe.ingredients {
                if !names.contains(&ingredient.name.as_str()) {
                    names.push(&ingredient.name);
                }
            }
        }

        let keys: Vec<&str> = totals.iter().map(|(name, _)| name).collect();
        prop_assert_eq!(&keys, &names);

        for name in names {
            let expected: f64 = selection
                .iter()
                .flat_map(|r| r.ingredients.iter())
                .filter(|i| i.name == name)
                .map(|i| parse_quantity(&i.quantity))
                .sum();
            prop_assert_eq!(totals.get(name), Some(expected));
        }
    }
}

#[test]
fn empty_selection_has_no_totals() {
    assert!(Selection::new().aggregate().is_empty());
    assert!(aggregate(Vec::<&Recipe>::new()).is_empty());
}

#[test]
fn unparsable_quantities_contribute_zero() {
    let recipe = Recipe::new("1", "Odd")
        .with_ingredient("Egg", "abc")
        .with_ingredient("Egg", "")
        .with_ingredient("Egg", "a dozen");

    assert_eq!(aggregate([&recipe]).get("Egg"), Some(0.0));
}
