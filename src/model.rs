use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub thumbnail: String,
    pub ingredients: Vec<Ingredient>,
}

/// Ingredient line as supplied by the source. The quantity is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

impl Recipe {
    /// Create a recipe with no instructions or thumbnail
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            instructions: String::new(),
            thumbnail: String::new(),
            ingredients: Vec::new(),
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    pub fn with_ingredient(mut self, name: impl Into<String>, quantity: impl Into<String>) -> Self {
        self.ingredients.push(Ingredient::new(name, quantity));
        self
    }
}

/// Top level catalog payload: `{ "meals": [...] }`. A `null` list is an empty catalog.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

impl CatalogResponse {
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.meals
            .unwrap_or_default()
            .into_iter()
            .map(Recipe::from)
            .collect()
    }
}

/// Raw meal record as it appears on the wire
#[derive(Debug, Deserialize)]
pub(crate) struct MealRecord {
    #[serde(rename = "idMeal")]
    id: IdValue,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(default)]
    ingredients: Option<Vec<IngredientRecord>>,
    /// Remaining columns, including `strIngredientN` / `strMeasureN`
    #[serde(flatten)]
    rest: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdValue {
    String(String),
    Number(serde_json::Number),
}

#[derive(Debug, Deserialize)]
struct IngredientRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    quantity: Option<Quantity>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Quantity {
    String(String),
    Number(serde_json::Number),
}

impl Quantity {
    fn into_text(self) -> String {
        match self {
            Quantity::String(s) => s,
            Quantity::Number(n) => n.to_string(),
        }
    }
}

impl From<MealRecord> for Recipe {
    fn from(record: MealRecord) -> Self {
        let id = match record.id {
            IdValue::String(s) => s,
            IdValue::Number(n) => n.to_string(),
        };

        let ingredients = match record.ingredients {
            Some(list) => list
                .into_iter()
                .map(|item| Ingredient {
                    name: item.name.unwrap_or_default(),
                    quantity: item.quantity.map(Quantity::into_text).unwrap_or_default(),
                })
                .collect(),
            None => numbered_ingredients(&record.rest),
        };

        Recipe {
            id,
            name: record.name.unwrap_or_default(),
            instructions: record.instructions.unwrap_or_default(),
            thumbnail: record.thumbnail.unwrap_or_default(),
            ingredients,
        }
    }
}

/// Collect `strIngredientN` / `strMeasureN` pairs in index order.
/// Blank or null names are skipped.
fn numbered_ingredients(columns: &Map<String, Value>) -> Vec<Ingredient> {
    let mut indexed: Vec<(u32, Ingredient)> = columns
        .iter()
        .filter_map(|(key, value)| {
            let index: u32 = key.strip_prefix("strIngredient")?.parse().ok()?;
            let name = value.as_str()?;
            if name.trim().is_empty() {
                return None;
            }
            let quantity = match columns.get(&format!("strMeasure{}", index)) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            };
            Some((index, Ingredient::new(name, quantity)))
        })
        .collect();

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, ingredient)| ingredient).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<Recipe> {
        serde_json::from_str::<CatalogResponse>(json)
            .unwrap()
            .into_recipes()
    }

    #[test]
    fn test_explicit_ingredient_list() {
        let recipes = parse(
            r#"{"meals": [{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken",
                "strInstructions": "Cook it",
                "strMealThumb": "https://example.com/t.jpg",
                "ingredients": [
                    {"name": "soy sauce", "quantity": "3/4 cup"},
                    {"name": "water", "quantity": 2}
                ]
            }]}"#,
        );

        assert_eq!(recipes.len(), 1);
        let recipe = &recipes[0];
        assert_eq!(recipe.id, "52772");
        assert_eq!(recipe.name, "Teriyaki Chicken");
        assert_eq!(recipe.thumbnail, "https://example.com/t.jpg");
        assert_eq!(
            recipe.ingredients,
            vec![
                Ingredient::new("soy sauce", "3/4 cup"),
                Ingredient::new("water", "2"),
            ]
        );
    }

    #[test]
    fn test_numbered_columns_are_ordered_and_blank_skipped() {
        let recipes = parse(
            r#"{"meals": [{
                "idMeal": "1",
                "strMeal": "Pancakes",
                "strIngredient10": "Salt",
                "strMeasure10": "pinch",
                "strIngredient2": "Eggs",
                "strMeasure2": "2",
                "strIngredient1": "Flour",
                "strMeasure1": "100g",
                "strIngredient3": "",
                "strMeasure3": "",
                "strIngredient4": null,
                "strMeasure4": null
            }]}"#,
        );

        let names: Vec<&str> = recipes[0]
            .ingredients
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Flour", "Eggs", "Salt"]);
        assert_eq!(recipes[0].ingredients[0].quantity, "100g");
    }

    #[test]
    fn test_null_meals_is_empty_catalog() {
        assert!(parse(r#"{"meals": null}"#).is_empty());
        assert!(parse(r#"{}"#).is_empty());
    }

    #[test]
    fn test_null_text_fields_become_empty() {
        let recipes = parse(
            r#"{"meals": [{"idMeal": 7, "strMeal": null, "strMealThumb": null}]}"#,
        );

        assert_eq!(recipes[0].id, "7");
        assert_eq!(recipes[0].name, "");
        assert_eq!(recipes[0].thumbnail, "");
        assert!(recipes[0].ingredients.is_empty());
    }

    #[test]
    fn test_missing_quantity_is_empty() {
        let recipes = parse(
            r#"{"meals": [{"idMeal": "1", "ingredients": [{"name": "Egg"}]}]}"#,
        );

        assert_eq!(recipes[0].ingredients[0], Ingredient::new("Egg", ""));
    }
}
