use super::*;

/// Tests that anonymous visitors are sent to the login page.
///
/// Expected: Redirect to /login
#[tokio::test]
async fn redirects_anonymous_visitor_to_login() {
    let app = TestApp::new().await;

    let response = app.get("/dashboard", None).await;

    assert_redirect(&response, "/login");
}

/// Tests the dashboard view model for a logged-in user.
///
/// Expected: 200 with the user's entries, three featured articles and their theme
#[tokio::test]
async fn renders_entries_and_featured_news() {
    let app = TestApp::new().await;
    let user = factory::user::UserFactory::new(app.db())
        .theme("dark")
        .build()
        .await
        .unwrap();
    factory::weight_entry::create_weight_entry(app.db(), user.id)
        .await
        .unwrap();
    let cookie = app.login_as(user.id).await;

    let response = app.get("/dashboard", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["template"], "dashboard/index");
    assert_eq!(body["model"]["user"]["theme"], "dark");
    assert_eq!(body["model"]["recentEntries"].as_array().unwrap().len(), 1);
    assert_eq!(body["model"]["featuredNews"].as_array().unwrap().len(), 3);
}
