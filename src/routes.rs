/*!
 * The routes module contains all the tide routes and the logic to fulfill the responses for each
 * route.
 */
use chrono::Utc;
use log::*;
use serde::Deserialize;
use serde_json::json;
use tide::http::mime;
use tide::{Redirect, Request, Response, StatusCode};

use crate::models::{Choice, Question};
use crate::{dao, templates, AppState};

/**
 * How many questions the index page lists
 */
const LATEST_COUNT: i64 = 5;

const NO_CHOICE: &str = "You didn't select a choice.";

/**
 * Form fields submitted by the voting page
 */
#[derive(Debug, Default, Deserialize)]
struct Ballot {
    choice: Option<String>,
}

/**
 * Render the named template into an HTML response
 */
fn render(state: &AppState, name: &str, context: &serde_json::Value) -> tide::Result<Response> {
    let body = state.templates.render(name, context)?;
    Ok(Response::builder(StatusCode::Ok)
        .body(body)
        .content_type(mime::HTML)
        .build())
}

fn not_found() -> tide::Error {
    tide::Error::from_str(StatusCode::NotFound, "No such question")
}

/**
 * Pull the question id out of the `:id` path segment, anything that is not an integer cannot
 * name a question
 */
fn requested_id(req: &Request<AppState>) -> tide::Result<i64> {
    let id = req.param("id")?;
    id.parse::<i64>().map_err(|_| {
        debug!("Non-numeric question id: {:?}", id);
        not_found()
    })
}

fn detail_page(
    state: &AppState,
    question: &Question,
    choices: &[Choice],
    error_message: Option<&str>,
) -> tide::Result<Response> {
    render(
        state,
        templates::DETAIL,
        &json!({
            "question": question,
            "choices": choices,
            "error_message": error_message,
        }),
    )
}

/**
 *  GET /
 */
pub async fn index(req: Request<AppState>) -> tide::Result<Response> {
    let questions = dao::latest_published(&req.state().db, Utc::now(), LATEST_COUNT).await?;
    debug!("Listing {} questions", questions.len());

    let listing: Vec<serde_json::Value> = questions
        .iter()
        .map(|q| {
            json!({
                "id": q.id,
                "text": q.text,
                "recent": q.was_published_recently(),
            })
        })
        .collect();

    render(
        req.state(),
        templates::INDEX,
        &json!({ "latest_question_list": listing }),
    )
}

pub mod questions {
    use super::*;

    /**
     *  GET /:id/
     */
    pub async fn detail(req: Request<AppState>) -> tide::Result<Response> {
        let id = requested_id(&req)?;
        let db = &req.state().db;

        match dao::published_question(db, id, Utc::now()).await? {
            Some(question) => {
                debug!("Found question: {}", question);
                let choices = dao::choices_for(db, question.id).await?;
                detail_page(req.state(), &question, &choices, None)
            }
            None => Err(not_found()),
        }
    }

    /**
     *  GET /:id/results/
     *
     * Unlike the detail page this does not check the publish date
     */
    pub async fn results(req: Request<AppState>) -> tide::Result<Response> {
        let id = requested_id(&req)?;
        let db = &req.state().db;

        let question = dao::question(db, id).await?.ok_or_else(not_found)?;
        let choices = dao::choices_for(db, question.id).await?;

        render(
            req.state(),
            templates::RESULTS,
            &json!({ "question": question, "choices": choices }),
        )
    }

    /**
     *  POST /:id/vote/
     */
    pub async fn vote(mut req: Request<AppState>) -> tide::Result<Response> {
        let id = requested_id(&req)?;
        let form = req.body_string().await?;
        let ballot: Ballot = serde_qs::from_str(&form).unwrap_or_else(|err| {
            debug!("Unreadable ballot {:?}: {}", form, err);
            Ballot::default()
        });
        let db = &req.state().db;

        let question = dao::question(db, id).await?.ok_or_else(not_found)?;

        if let Some(choice_id) = ballot.choice.as_deref().and_then(|c| c.parse::<i64>().ok()) {
            if dao::record_vote(db, question.id, choice_id).await? {
                info!("Vote recorded on \"{}\" for choice {}", question, choice_id);
                return Ok(Redirect::see_other(format!("/{}/results/", question.id)).into());
            }
        }

        warn!("Rejected ballot for question {}: {:?}", question.id, ballot);
        let choices = dao::choices_for(db, question.id).await?;
        detail_page(req.state(), &question, &choices, Some(NO_CHOICE))
    }
}
