use std::time::{SystemTime, UNIX_EPOCH};

use catalog_client::models::{FilmFilter, SignInRequest, SignUpRequest};
use catalog_client::{CatalogClient, CatalogClientError};

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

fn base_url() -> String {
    std::env::var("CATALOG_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8080/v1".to_string())
}

#[tokio::test]
#[ignore = "requires running catalog API"]
async fn public_listing_flow() {
    let client = CatalogClient::new(base_url());

    let films = client
        .films(&FilmFilter::default())
        .await
        .expect("film listing must succeed");
    assert!(films.len() <= usize::try_from(FilmFilter::default().page_size).expect("page size"));

    if let Some(film) = films.first() {
        let detail = client.film(film.id).await.expect("film detail must succeed");
        assert_eq!(detail.id, film.id);

        let reviews = client
            .reviews_by_film(film.id)
            .await
            .expect("film reviews must succeed");
        assert!(reviews.iter().all(|review| review.film_id == film.id));
    }

    let genres = client.genres().await.expect("genre listing must succeed");
    let filtered = FilmFilter {
        genre_ids: genres.iter().take(2).map(|genre| genre.genre_id).collect(),
        ..FilmFilter::default()
    };
    client
        .films(&filtered)
        .await
        .expect("filtered listing must succeed");
}

#[tokio::test]
#[ignore = "requires running catalog API"]
async fn sign_up_requires_email_confirmation() {
    let client = CatalogClient::new(base_url());

    let suffix = unique_suffix();
    let email = format!("smoke_{suffix}@example.com");
    let password = "SmokePass123".to_string();

    client
        .sign_up(&SignUpRequest {
            email: email.clone(),
            password: password.clone(),
            login: Some(format!("smoke_{suffix}")),
        })
        .await
        .expect("sign up must succeed");

    // Почта не подтверждена: вход должен быть отвергнут.
    let err = client
        .sign_in(&SignInRequest { email, password })
        .await
        .expect_err("sign in without confirmation must fail");
    assert!(
        !matches!(err, CatalogClientError::Http(_)),
        "должна быть бизнес-ошибка, а не транспортная: {err:?}"
    );
    assert!(client.token().is_none());
}

#[tokio::test]
#[ignore = "requires running catalog API"]
async fn protected_endpoint_rejects_anonymous() {
    let client = CatalogClient::new(base_url());

    let err = client
        .my_reviews()
        .await
        .expect_err("anonymous access to own reviews must fail");
    assert!(matches!(err, CatalogClientError::Unauthorized));
}
