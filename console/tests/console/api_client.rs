use payloads::{BookId, ClientError, LoanId, StatusCode, requests};
use test_helpers::{TEST_TODAY, assert_status_code, spawn_app};

#[tokio::test]
async fn missing_records_are_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_status_code(app.client.get_book(BookId(7)).await, StatusCode::NOT_FOUND);
    assert_status_code(app.client.get_loan(LoanId(7)).await, StatusCode::NOT_FOUND);
    assert_status_code(
        app.client.delete_book(BookId(7)).await,
        StatusCode::NOT_FOUND,
    );
    Ok(())
}

#[tokio::test]
async fn writes_send_camel_case_json() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_author(3, "Frank Herbert", "American");

    app.client
        .create_book(&requests::BookDetails {
            title: "Dune".into(),
            isbn: "9780441013593".into(),
            publication_year: 1965,
            author_id: payloads::AuthorId(3),
        })
        .await?;

    let books = app.client.list_books().await?;
    assert_eq!(books.len(), 1);
    let dune = app.client.get_book(books[0].id).await?;
    assert_eq!(dune.publication_year, 1965);
    assert_eq!(dune.author_name.as_deref(), Some("Frank Herbert"));
    Ok(())
}

#[tokio::test]
async fn duplicate_isbn_is_a_bad_request() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_author(1, "Jane Austen", "British");
    app.seed_book(2, "Emma", "9780141439587", 1815, 1);

    let result = app
        .client
        .create_book(&requests::BookDetails {
            title: "Emma (again)".into(),
            isbn: "9780141439587".into(),
            publication_year: 1815,
            author_id: payloads::AuthorId(1),
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn loans_by_borrower_encode_the_name() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_author(1, "Jane Austen", "British");
    app.seed_book(2, "Emma", "9780141439587", 1815, 1);
    app.client
        .create_loan(&requests::CreateLoan {
            book_id: BookId(2),
            borrower_name: "Ada Lovelace".into(),
        })
        .await?;

    let loans = app.client.loans_by_borrower("Ada Lovelace").await?;
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].loan_date, TEST_TODAY);
    assert_eq!(loans[0].book_title.as_deref(), Some("Emma"));
    assert_eq!(
        app.backend
            .count("GET", "/loan-service/api/loans/borrower/Ada%20Lovelace"),
        1
    );

    app.client.delete_loan(loans[0].id).await?;
    assert!(app.client.list_loans().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn loan_for_unknown_book_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .create_loan(&requests::CreateLoan {
            book_id: BookId(999),
            borrower_name: "Ada".into(),
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn error_messages_carry_the_response_text() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.fail_next("GET", "/book-service/api/authors", 502);

    let err = app.client.list_authors().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    assert_eq!(err.to_string(), "injected failure");
    Ok(())
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() -> anyhow::Result<()> {
    // bind and drop to get a port nothing listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
    let config = payloads::ApiConfig::new(format!("http://127.0.0.1:{port}"));
    let client = payloads::APIClient::new(std::sync::Arc::new(config));

    let err = client.list_books().await.unwrap_err();
    assert!(matches!(err, payloads::ClientError::Network(_)));
    assert_eq!(err.status(), None);
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.garble_next("GET", "/book-service/api/books");

    let result = app.client.list_books().await;
    assert!(matches!(result, Err(ClientError::Decode(_))), "{result:?}");
    let error = result.unwrap_err();
    assert_eq!(error.status(), None);
    assert!(error.to_string().starts_with("Unexpected response"));
    Ok(())
}

#[tokio::test]
async fn zero_random_count_leaves_the_choice_to_the_service() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let path = "/recommendation-service/api/recommendations";

    app.client.random_recommendations(Some(0)).await?;
    app.client.random_recommendations(Some(3)).await?;

    let queries = app
        .backend
        .requests()
        .into_iter()
        .filter(|request| request.is("GET", path))
        .map(|request| request.query)
        .collect::<Vec<_>>();
    assert_eq!(queries, vec![None, Some("count=3".to_string())]);
    Ok(())
}
