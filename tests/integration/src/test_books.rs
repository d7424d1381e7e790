//! Book CRUD integration tests against a running Bookstack server.

#[cfg(test)]
mod tests {
    use crate::{book_url, books_url, cleanup_book, client, create_test_book, test_title};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_list_books_as_array() {
        let client = client();
        let resp = client.get(books_url()).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body.is_array());
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_create_and_get_book() {
        let client = client();
        let title = test_title("create");

        let id = create_test_book(&client, &title).await;

        let resp = client.get(book_url(id)).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["id"], id);
        assert_eq!(body["titulo"], title.as_str());
        assert_eq!(body["autor"], "Autor de Integração");
        assert_eq!(body["ano_publicacao"], 2024);

        cleanup_book(&client, id).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_update_all_fields() {
        let client = client();
        let id = create_test_book(&client, &test_title("update")).await;

        let new_title = test_title("updated");
        let resp = client
            .put(book_url(id))
            .json(&serde_json::json!({
                "titulo": new_title,
                "autor": "Autora Nova",
                "ano_publicacao": 1999,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["id"], id);
        assert_eq!(body["titulo"], new_title.as_str());
        assert_eq!(body["autor"], "Autora Nova");
        assert_eq!(body["ano_publicacao"], 1999);

        cleanup_book(&client, id).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_delete_then_404_on_get() {
        let client = client();
        let id = create_test_book(&client, &test_title("delete")).await;

        let resp = client.delete(book_url(id)).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["detail"], "Livro removido com sucesso");

        let resp = client.get(book_url(id)).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["detail"], "Livro não encontrado");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_404_on_unknown_id() {
        let client = client();
        for resp in [
            client.get(book_url(98_765_432)).send().await.unwrap(),
            client.delete(book_url(98_765_432)).send().await.unwrap(),
        ] {
            assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_422_on_missing_autor_and_create_nothing() {
        let client = client();

        let before: serde_json::Value = client
            .get(books_url())
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let resp = client
            .post(books_url())
            .json(&serde_json::json!({
                "titulo": test_title("invalid"),
                "ano_publicacao": 2000,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);

        let after: serde_json::Value = client
            .get(books_url())
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(
            before.as_array().unwrap().len(),
            after.as_array().unwrap().len()
        );
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_422_on_non_integer_id() {
        let client = client();
        let url = format!("{}abc", books_url());
        let resp = client.get(url).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_apply_update_idempotently() {
        let client = client();
        let id = create_test_book(&client, &test_title("idem")).await;

        let replacement = serde_json::json!({
            "titulo": test_title("idem-final"),
            "autor": "Mesma Autora",
            "ano_publicacao": 2001,
        });

        let first: serde_json::Value = client
            .put(book_url(id))
            .json(&replacement)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let second: serde_json::Value = client
            .put(book_url(id))
            .json(&replacement)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(first, second);

        cleanup_book(&client, id).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_health() {
        let client = client();
        let url = format!(
            "{}/health",
            std::env::var("BOOKSTACK_ENDPOINT_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_owned())
        );
        let resp = client.get(url).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "running");
    }
}
