//! Full-stack tests: service over the real repository and async client,
//! with the Contato API mocked by mockito.

use contatos_mcp_server::client::{AsyncContactStore, AsyncContactStoreImpl};
use contatos_mcp_server::form::{DraftChange, LoadingIndicator};
use contatos_mcp_server::repositories::{ContactRepository, StoreContactRepository};
use contatos_mcp_server::services::{ContactService, ContactServiceImpl};
use contatos_mcp_server::{ContactStoreClient, ContatosMcpServer};
use mockito::{Matcher, Server, ServerGuard};
use rmcp::ServerHandler;
use std::sync::Arc;

const LIST_BODY: &str = r#"[
    {"id": 1, "nome": "Ana", "telefone": "11987654321", "email": "ana@x.com", "ativo": true, "dataNascimento": "2000-01-05"}
]"#;

async fn setup() -> (ServerGuard, Arc<dyn ContactRepository>) {
    let server = Server::new_async().await;
    let sync_client = ContactStoreClient::with_base_url(server.url(), "tok".to_string());
    let client = Arc::new(AsyncContactStoreImpl::new(sync_client)) as Arc<dyn AsyncContactStore>;
    let repo = Arc::new(StoreContactRepository::new(client)) as Arc<dyn ContactRepository>;
    (server, repo)
}

#[tokio::test]
async fn test_list_through_async_client() {
    let (mut server, repo) = setup().await;
    let mock = server
        .mock("GET", "/tok")
        .with_status(200)
        .with_body(LIST_BODY)
        .create_async()
        .await;

    let service = ContactServiceImpl::new(repo);
    let rows = service.list_contacts().await.unwrap();

    mock.assert_async().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].telefone, "(11) 98765-4321");
    assert_eq!(rows[0].data_nascimento, "05/01/2000");
}

#[tokio::test]
async fn test_submit_new_posts_then_refetches() {
    let (mut server, repo) = setup().await;
    let create = server
        .mock("POST", "/tok")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "nome": "Ana",
            "telefone": "11987654321",
            "ativo": true
        })))
        .with_status(200)
        .with_body("")
        .create_async()
        .await;
    let list = server
        .mock("GET", "/tok")
        .with_status(200)
        .with_body(LIST_BODY)
        .create_async()
        .await;

    let service = ContactServiceImpl::new(repo);
    service.open_new_form().await;
    service
        .update_form(DraftChange {
            nome: Some("Ana".to_string()),
            telefone: Some("11987654321".to_string()),
            email: Some("ana@x.com".to_string()),
            data_nascimento: Some("2000-01-05".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let rows = service.submit_form().await.unwrap();

    create.assert_async().await;
    list.assert_async().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(service.close_form().await.state, "closed");
}

#[tokio::test]
async fn test_edit_puts_to_contact_path() {
    let (mut server, repo) = setup().await;
    let list = server
        .mock("GET", "/tok")
        .with_status(200)
        .with_body(LIST_BODY)
        .expect(2)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/tok/1")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "id": 1,
            "email": "ana.maria@x.com"
        })))
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let service = ContactServiceImpl::new(repo);
    service.list_contacts().await.unwrap();
    service.open_edit_form(1).await.unwrap();
    service
        .update_form(DraftChange {
            email: Some("ana.maria@x.com".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    service.submit_form().await.unwrap();

    update.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn test_delete_failure_is_reported() {
    let (mut server, repo) = setup().await;
    let delete = server
        .mock("DELETE", "/tok/3")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let service = ContactServiceImpl::new(repo);
    let result = service.delete_contact(3).await;

    delete.assert_async().await;
    assert!(result.is_err());
    assert_eq!(
        service.indicator().await,
        LoadingIndicator::Error("API error (status 500): boom".to_string())
    );
}

#[tokio::test]
async fn test_server_info() {
    let (_server, repo) = setup().await;
    let server = ContatosMcpServer::new(repo);

    let info = server.get_info();

    assert_eq!(info.server_info.name, "contatos-mcp-server");
    assert!(info.capabilities.tools.is_some());
}
