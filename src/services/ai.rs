use std::collections::HashSet;

use log::{info, warn};

use crate::domain::sales_rep::Dataset;
use crate::dto::ai::{AiAnswer, AiQuery};
use crate::llm::{LlmError, LlmGateway};
use crate::repository::DatasetReader;
use crate::services::{ServiceError, ServiceResult};

/// Canned answer when the dataset holds no records.
pub const EMPTY_DATA_ANSWER: &str = "Sales data is empty or not in the expected format.";

/// Canned answer when no candidate model can be initialized.
pub const SERVICE_UNAVAILABLE_ANSWER: &str =
    "Sorry, AI service is currently unavailable. Please try again later.";

/// Status literals the model tends to wrap in quotation marks.
const STATUS_LITERALS: [&str; 3] = ["Closed Won", "In Progress", "Closed Lost"];

/// Answers a natural-language question about the sales data.
///
/// Caller-supplied data takes precedence over the backing file. The gateway
/// is never invoked for an empty collection, and exhausting the model
/// candidate list yields a sentinel answer rather than an error.
pub async fn ask<R, L>(repo: &R, llm: &L, query: AiQuery) -> ServiceResult<AiAnswer>
where
    R: DatasetReader + ?Sized,
    L: LlmGateway + ?Sized,
{
    if query.question.trim().is_empty() {
        return Err(ServiceError::Validation(
            "question must not be empty".to_string(),
        ));
    }

    let mut dataset = match query.data {
        Some(data) => data,
        None => {
            info!("No data provided in request, loading from file");
            repo.load()?
        }
    };

    if dataset.sales_reps.is_empty() {
        warn!("No sales representatives data found");
        return Ok(AiAnswer {
            answer: EMPTY_DATA_ANSWER.to_string(),
        });
    }

    normalize_statuses(&mut dataset);
    let prompt = build_prompt(&dataset)?;

    let model = match llm.resolve_model().await {
        Ok(model) => model,
        Err(LlmError::ModelUnavailable(models)) => {
            warn!("No usable model among: {models}");
            return Ok(AiAnswer {
                answer: SERVICE_UNAVAILABLE_ANSWER.to_string(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    let reply = llm
        .generate(&model, &format!("{prompt}\n\nQuestion: {}", query.question))
        .await?;

    Ok(AiAnswer {
        answer: clean_reply(&reply),
    })
}

/// Strip embedded double quotes from every deal status. In-memory only; the
/// backing file is never written back.
fn normalize_statuses(dataset: &mut Dataset) {
    for rep in &mut dataset.sales_reps {
        for deal in &mut rep.deals {
            if deal.status.contains('"') {
                deal.status = deal.status.replace('"', "");
            }
        }
    }
}

/// Distinct non-empty values in first-seen order, keeping prompt assembly
/// deterministic.
fn distinct_non_empty<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| !v.is_empty() && seen.insert(*v)).collect()
}

/// Assemble the system context: summary facts, the no-quotes instruction,
/// the record schema and the full dataset as JSON.
fn build_prompt(dataset: &Dataset) -> ServiceResult<String> {
    let reps = &dataset.sales_reps;
    let total_reps = reps.len();
    let regions = distinct_non_empty(reps.iter().map(|r| r.region.as_str()));
    let roles = distinct_non_empty(reps.iter().map(|r| r.role.as_str()));

    let data_json = serde_json::to_string_pretty(dataset)
        .map_err(|e| ServiceError::Unexpected(format!("Failed to serialize dataset: {e}")))?;

    Ok(format!(
        "You are a sales analysis assistant. The data contains information about {total_reps} \
         sales representatives across various regions including {}. Their roles include {}.\n\
         \n\
         IMPORTANT: Do not use quotes when referring to status values like Closed Won, \
         In Progress, or Closed Lost. Simply write the status directly without any \
         quotation marks.\n\
         \n\
         Each sales representative has the following data structure:\n\
         - id: unique identifier\n\
         - name: representative's name\n\
         - role: position\n\
         - region: geographical area\n\
         - skills: list of professional skills\n\
         - deals: list of deals (client, value, status)\n\
         - clients: list of clients (name, industry, contact)\n\
         \n\
         Complete data: {data_json}\n\
         \n\
         Answer the question based on this context specifically and helpfully. Provide the \
         answer in English. Do NOT use quotation marks around status values in your response.",
        regions.join(", "),
        roles.join(", ")
    ))
}

/// Clean up the raw reply: collapse escaped newlines, unescape quotes and
/// strip quotation marks wrapping the known status literals.
fn clean_reply(reply: &str) -> String {
    let mut cleaned = reply.replace("\\n", " ").replace("\\\"", "\"");
    for status in STATUS_LITERALS {
        cleaned = cleaned.replace(&format!("\"{status}\""), status);
    }
    cleaned.trim().to_string()
}
