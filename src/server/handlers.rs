//! MCP tool handlers for the Contatos server.
//!
//! Each tool maps onto one [`ContactService`] operation and answers with
//! pretty-printed JSON.

use crate::form::{ContactDraft, DraftChange, FormMode, LoadingIndicator};
use crate::models::{parse_ativo, ContactRow};
use crate::repositories::ContactRepository;
use crate::services::{ContactService, ContactServiceImpl};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The Contatos MCP server: contact table plus the add/edit form.
#[derive(Clone)]
pub struct ContatosMcpServer {
    contact_service: Arc<dyn ContactService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContatosMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contatos-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for the Contatos contact store - lists contacts and drives the add/edit form (validation, Salvar/Editar, delete).".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    id: i64,
}

/// Form fields as the form inputs hold them. `ativo` is the select label.
#[derive(Debug, Default, Deserialize, JsonSchema)]
struct DraftFieldsParams {
    #[serde(default)]
    nome: Option<String>,
    #[serde(default)]
    telefone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    /// "Sim" or "Não"
    #[serde(default)]
    ativo: Option<String>,
    /// YYYY-MM-DD
    #[serde(default)]
    data_nascimento: Option<String>,
}

impl From<DraftFieldsParams> for DraftChange {
    fn from(params: DraftFieldsParams) -> Self {
        DraftChange {
            nome: params.nome,
            telefone: params.telefone,
            email: params.email,
            ativo: params.ativo.as_deref().map(parse_ativo),
            data_nascimento: params.data_nascimento,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CheckDraftParams {
    #[serde(flatten)]
    fields: DraftFieldsParams,
    /// "new" or "edit"; defaults to "new"
    #[serde(default)]
    mode: Option<String>,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

/// Contact table plus the loading indicator, as list/submit/delete answer.
fn rows_json(rows: &[ContactRow], indicator: &LoadingIndicator) -> serde_json::Value {
    serde_json::json!({
        "count": rows.len(),
        "contacts": rows,
        "indicator": indicator,
    })
}

fn parse_mode(mode: Option<&str>) -> Result<FormMode, McpError> {
    match mode.map(str::to_ascii_lowercase).as_deref() {
        None | Some("new") => Ok(FormMode::New),
        Some("edit") => Ok(FormMode::Edit),
        Some(other) => Err(McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(format!("Unknown form mode '{}'", other)),
            data: None,
        }),
    }
}

#[tool_router]
impl ContatosMcpServer {
    /// Create a new server over a contact repository.
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        let contact_service =
            Arc::new(ContactServiceImpl::new(contact_repo)) as Arc<dyn ContactService>;
        Self::with_service(contact_service)
    }

    /// Create a server over an existing service.
    pub fn with_service(contact_service: Arc<dyn ContactService>) -> Self {
        Self {
            contact_service,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "List every contact in the store, formatted for display: phone as (AA) NNNNN-NNNN, birth date as DD/MM/YYYY, ativo as Sim/Não."
    )]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let rows = self
            .contact_service
            .list_contacts()
            .await
            .map_err(to_mcp_error)?;

        let indicator = self.contact_service.indicator().await;
        json_result(&rows_json(&rows, &indicator))
    }

    /// Retrieve a stored contact by ID.
    #[tool(description = "Retrieve a contact by ID exactly as stored")]
    async fn get_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let contact = self
            .contact_service
            .get_contact(params.0.id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&contact)
    }

    #[tool(
        description = "Open the contact form on an empty draft for a new contact (Salvar)"
    )]
    async fn open_new_contact_form(&self) -> Result<CallToolResult, McpError> {
        let snapshot = self.contact_service.open_new_form().await;
        json_result(&snapshot)
    }

    #[tool(
        description = "Open the contact form on an existing contact for editing (Editar). The draft is filled from the stored record."
    )]
    async fn open_edit_contact_form(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let snapshot = self
            .contact_service
            .open_edit_form(params.0.id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&snapshot)
    }

    /// Change fields of the open draft.
    #[tool(
        description = "Change fields of the open contact form. Only the given fields are written; the Salvar/Editar flag is re-evaluated after every change."
    )]
    async fn update_contact_form(
        &self,
        params: Parameters<DraftFieldsParams>,
    ) -> Result<CallToolResult, McpError> {
        let change = DraftChange::from(params.0);
        tracing::debug!("update_contact_form: {:?}", change);

        let snapshot = self
            .contact_service
            .update_form(change)
            .await
            .map_err(to_mcp_error)?;

        json_result(&snapshot)
    }

    #[tool(
        description = "Commit the open form: create the contact (new) or update it (edit), then refresh the list and close the form. Refused while the draft is invalid."
    )]
    async fn submit_contact_form(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: submit_contact_form called");

        let rows = self
            .contact_service
            .submit_form()
            .await
            .map_err(|e| {
                tracing::error!("Failed to submit contact form: {:?}", e);
                to_mcp_error(e)
            })?;

        let indicator = self.contact_service.indicator().await;
        json_result(&rows_json(&rows, &indicator))
    }

    #[tool(description = "Close the contact form and discard the draft")]
    async fn close_contact_form(&self) -> Result<CallToolResult, McpError> {
        let snapshot = self.contact_service.close_form().await;
        json_result(&snapshot)
    }

    #[tool(description = "Delete a contact by ID, then refresh the list")]
    async fn delete_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.0.id;
        tracing::info!("MCP Handler: delete_contact called for {}", id);

        let rows = self
            .contact_service
            .delete_contact(id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete contact {}: {:?}", id, e);
                to_mcp_error(e)
            })?;

        let indicator = self.contact_service.indicator().await;
        let mut response = rows_json(&rows, &indicator);
        response["deleted"] = serde_json::json!(id);
        json_result(&response)
    }

    #[tool(
        description = "Check a draft without opening the form: commit eligibility, the reasons it is refused, and how it would be displayed"
    )]
    async fn check_contact_draft(
        &self,
        params: Parameters<CheckDraftParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mode = parse_mode(params.mode.as_deref())?;

        let mut draft = ContactDraft::new();
        draft.apply(DraftChange::from(params.fields));

        let check = self.contact_service.check_draft(draft, mode).await;
        json_result(&check)
    }
}
