use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::{Attribute, Price};

#[derive(FromRow)]
pub(crate) struct RecipeRow {
    pub id: String,
    pub title: String,
    pub time_minutes: i64,
    pub price_cents: i64,
    pub link: String,
}

/// A recipe together with the ingredients and tags it references, each
/// sorted by name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub time_minutes: i64,
    pub price: Price,
    pub link: String,
    pub ingredients: Vec<Attribute>,
    pub tags: Vec<Attribute>,
}

impl Recipe {
    pub(crate) fn from_row(
        row: RecipeRow,
        ingredients: Vec<Attribute>,
        tags: Vec<Attribute>,
    ) -> recipebox_shared::Result<Self> {
        let price = Price::from_cents(row.price_cents)
            .map_err(|e| anyhow::anyhow!("stored price of recipe {} is invalid: {e}", row.id))?;

        Ok(Self {
            id: row.id,
            title: row.title,
            time_minutes: row.time_minutes,
            price,
            link: row.link,
            ingredients,
            tags,
        })
    }

    pub fn ingredient_ids(&self) -> Vec<String> {
        self.ingredients.iter().map(|i| i.id.to_owned()).collect()
    }

    pub fn tag_ids(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.id.to_owned()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_representation_nests_attributes() {
        let recipe = Recipe::from_row(
            RecipeRow {
                id: "r1".to_owned(),
                title: "Soup".to_owned(),
                time_minutes: 15,
                price_cents: 550,
                link: String::new(),
            },
            vec![Attribute {
                id: "i1".to_owned(),
                name: "Leek".to_owned(),
            }],
            vec![],
        )
        .unwrap();

        assert_eq!(recipe.ingredient_ids(), vec!["i1".to_owned()]);
        assert_eq!(
            serde_json::to_value(&recipe).unwrap(),
            serde_json::json!({
                "id": "r1",
                "title": "Soup",
                "time_minutes": 15,
                "price": "5.50",
                "link": "",
                "ingredients": [{ "id": "i1", "name": "Leek" }],
                "tags": [],
            })
        );
    }

    #[test]
    fn stored_price_out_of_range_is_an_error() {
        let row = RecipeRow {
            id: "r1".to_owned(),
            title: "Soup".to_owned(),
            time_minutes: 15,
            price_cents: 10_000_000,
            link: String::new(),
        };

        assert!(Recipe::from_row(row, vec![], vec![]).is_err());
    }
}
