use axum::http::StatusCode;
use serde_json::json;

mod common;

use common::TestApp;

const RECIPES_URL: &str = "/recipe/recipes/";

fn detail_url(id: &str) -> String {
    format!("{RECIPES_URL}{id}/")
}

#[tokio::test]
async fn test_login_required() {
    let app = TestApp::new().await;

    let (status, _) = app.get(RECIPES_URL, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_recipe_with_ingredients_and_tags() {
    let app = TestApp::new().await;
    let token = app.create_user("test@recipebox.dev").await;
    let prawns = app.create_ingredient(&token, "Prawns").await;
    let ginger = app.create_ingredient(&token, "Ginger").await;
    let dessert = app.create_tag(&token, "Dessert").await;

    let (status, body) = app
        .post(
            RECIPES_URL,
            Some(&token),
            json!({
                "title": "Avocado lime cheesecake",
                "time_minutes": 60,
                "price": 20,
                "ingredients": [prawns, ginger],
                "tags": [dessert],
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["title"], "Avocado lime cheesecake");
    assert_eq!(body["price"], "20.00");
    assert_eq!(body["link"], "");
    assert_eq!(body["ingredients"], json!([ginger, prawns]));
    assert_eq!(body["tags"], json!([dessert]));

    let id = body["id"].as_str().unwrap();
    let (status, body) = app.get(&detail_url(id), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["ingredients"],
        json!([{ "id": ginger, "name": "Ginger" }, { "id": prawns, "name": "Prawns" }])
    );
    assert_eq!(body["tags"], json!([{ "id": dessert, "name": "Dessert" }]));
}

#[tokio::test]
async fn test_create_recipe_missing_fields() {
    let app = TestApp::new().await;
    let token = app.create_user("test@recipebox.dev").await;

    let (status, body) = app
        .post(RECIPES_URL, Some(&token), json!({ "title": "Soup" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "price": ["This field is required."],
            "time_minutes": ["This field is required."],
        })
    );
}

#[tokio::test]
async fn test_create_recipe_invalid_price() {
    let app = TestApp::new().await;
    let token = app.create_user("test@recipebox.dev").await;

    let (status, _) = app
        .post(
            RECIPES_URL,
            Some(&token),
            json!({ "title": "Soup", "time_minutes": 5, "price": "1.234" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            RECIPES_URL,
            Some(&token),
            json!({ "title": "Soup", "time_minutes": -1, "price": "1.00" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_recipe_with_foreign_tag() {
    let app = TestApp::new().await;
    let token = app.create_user("test@recipebox.dev").await;
    let other = app.create_user("other@recipebox.dev").await;
    let foreign = app.create_tag(&other, "Vegan").await;

    let (status, body) = app
        .post(
            RECIPES_URL,
            Some(&token),
            json!({ "title": "Soup", "time_minutes": 5, "price": "1.00", "tags": [foreign] }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "tags": [format!("Invalid pk \"{foreign}\" - object does not exist.")] })
    );

    let (_, body) = app.get(RECIPES_URL, Some(&token)).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_recipes_limited_to_user() {
    let app = TestApp::new().await;
    let token = app.create_user("test@recipebox.dev").await;
    let other = app.create_user("other@recipebox.dev").await;
    let foreign = app.create_recipe(&other, "Stew", &[], &[]).await;
    let first = app.create_recipe(&token, "Curry", &[], &[]).await;
    let second = app.create_recipe(&token, "Chips", &[], &[]).await;

    let (status, body) = app.get(RECIPES_URL, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let ids = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![second, first]);

    let (status, _) = app.get(&detail_url(&foreign), Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_recipes() {
    let app = TestApp::new().await;
    let token = app.create_user("test@recipebox.dev").await;
    let vegan = app.create_tag(&token, "Vegan").await;
    let vegetarian = app.create_tag(&token, "Vegetarian").await;
    let feta = app.create_ingredient(&token, "Feta cheese").await;
    let curry = app
        .create_recipe(&token, "Thai vegetable curry", &[], &[vegan.as_str()])
        .await;
    let tahini = app
        .create_recipe(
            &token,
            "Aubergine with tahini",
            &[feta.as_str()],
            &[vegetarian.as_str()],
        )
        .await;
    app.create_recipe(&token, "Fish and chips", &[], &[]).await;

    let (status, body) = app
        .get(&format!("{RECIPES_URL}?tags={vegan},{vegetarian}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    let ids = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![tahini.to_owned(), curry]);

    let (_, body) = app
        .get(&format!("{RECIPES_URL}?ingredients={feta}"), Some(&token))
        .await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], tahini);
}

#[tokio::test]
async fn test_partial_update_recipe() {
    let app = TestApp::new().await;
    let token = app.create_user("test@recipebox.dev").await;
    let breakfast = app.create_tag(&token, "Breakfast").await;
    let curry = app.create_tag(&token, "Curry").await;
    let id = app
        .create_recipe(&token, "Chicken tikka", &[], &[breakfast.as_str()])
        .await;

    let (status, body) = app
        .patch(
            &detail_url(&id),
            Some(&token),
            json!({ "title": "Chicken tikka masala", "tags": [curry] }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["title"], "Chicken tikka masala");
    assert_eq!(body["time_minutes"], 10);
    assert_eq!(body["tags"], json!([curry]));
}

#[tokio::test]
async fn test_full_update_recipe() {
    let app = TestApp::new().await;
    let token = app.create_user("test@recipebox.dev").await;
    let breakfast = app.create_tag(&token, "Breakfast").await;
    let id = app
        .create_recipe(&token, "Chicken tikka", &[], &[breakfast.as_str()])
        .await;

    let (status, body) = app
        .put(
            &detail_url(&id),
            Some(&token),
            json!({ "title": "Spaghetti carbonara", "time_minutes": 25, "price": "5.00" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["title"], "Spaghetti carbonara");
    assert_eq!(body["time_minutes"], 25);
    assert_eq!(body["tags"], json!([]));

    let (status, _) = app
        .put(&detail_url(&id), Some(&token), json!({ "title": "Soup" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_foreign_recipe() {
    let app = TestApp::new().await;
    let token = app.create_user("test@recipebox.dev").await;
    let other = app.create_user("other@recipebox.dev").await;
    let id = app.create_recipe(&other, "Stew", &[], &[]).await;

    let (status, _) = app
        .patch(&detail_url(&id), Some(&token), json!({ "title": "Mine" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_recipe() {
    let app = TestApp::new().await;
    let token = app.create_user("test@recipebox.dev").await;
    let other = app.create_user("other@recipebox.dev").await;
    let rice = app.create_ingredient(&token, "Rice").await;
    let id = app
        .create_recipe(&token, "Fried rice", &[rice.as_str()], &[])
        .await;

    let (status, _) = app.delete(&detail_url(&id), Some(&other)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&detail_url(&id), Some(&token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&detail_url(&id), Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app
        .get("/recipe/ingredients/?assigned_only=1", Some(&token))
        .await;
    assert_eq!(body, json!([]));
}
