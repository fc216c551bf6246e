//! Route definitions and request handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{middleware, Json, Router};
use chrono::{NaiveDate, Utc};
use fw_auth::{validate_date_range, AccessError};
use fw_model::Parent;
use fw_storage::{ChildProvider, MilestoneProvider, ParentProvider, WordProvider};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::{basic_auth_middleware, require_owner_or_admin, Caller};
use crate::dto::child::{ChildRepresentation, CreateChildRequest};
use crate::dto::milestone::{
    CreateMilestoneRequest, MilestoneRepresentation, MilestonesResponse, UpdateMilestoneRequest,
};
use crate::dto::parent::{ChangePasswordRequest, ParentRepresentation, RegisterParentRequest};
use crate::dto::word::{CreateWordRequest, WordRepresentation, WordsResponse};
use crate::dto::{RangeQuery, ScopeQuery};
use crate::error::{ApiError, ApiResult};
use crate::state::ApiState;

// ==================== Parent Handlers ====================

async fn register_parent<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Json(request): Json<RegisterParentRequest>,
) -> ApiResult<(StatusCode, [(&'static str, String); 1], Json<ParentRepresentation>)>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    if request.username.trim().is_empty() {
        return Err(ApiError::validation("Username must not be empty"));
    }
    if !request.mail.contains('@') {
        return Err(ApiError::validation("Mail must be a valid email address"));
    }
    state
        .passwords
        .check_policy(&request.password)
        .map_err(|err| ApiError::Validation(err.to_string()))?;

    if state.parents.get_by_username(&request.username).await?.is_some() {
        return Err(ApiError::conflict("Parent", "username", &request.username));
    }

    let hash = state
        .passwords
        .hash(&request.password)
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    let parent = Parent::new(request.username, hash, request.mail);
    state.parents.create(&parent).await.map_err(|err| {
        if err.is_duplicate() {
            ApiError::conflict("Parent", "username", &parent.username)
        } else {
            ApiError::Storage(err)
        }
    })?;

    tracing::info!(parent_id = %parent.id, username = %parent.username, "parent registered");
    let location = format!("/api/parents/{}", parent.id);
    Ok((StatusCode::CREATED, [("Location", location)], Json(parent.into())))
}

async fn list_parents<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
) -> ApiResult<Json<Vec<ParentRepresentation>>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let parents = state.parents.list().await?;
    Ok(Json(parents.into_iter().map(ParentRepresentation::from).collect()))
}

async fn get_parent<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Path(parent_id): Path<Uuid>,
) -> ApiResult<Json<ParentRepresentation>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let parent = state
        .parents
        .get_by_id(parent_id)
        .await?
        .ok_or(ApiError::not_found("Parent"))?;
    Ok(Json(parent.into()))
}

async fn delete_parent<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(parent_id): Path<Uuid>,
) -> ApiResult<StatusCode>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let parent = state
        .parents
        .get_by_id(parent_id)
        .await?
        .ok_or(ApiError::not_found("Parent"))?;
    require_owner_or_admin(&principal, &parent)?;
    state.parents.delete(parent.id).await?;
    tracing::info!(parent_id = %parent.id, "parent deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn change_password<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(parent_id): Path<Uuid>,
    Json(request): Json<ChangePasswordRequest>,
) -> ApiResult<StatusCode>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let mut parent = state
        .parents
        .get_by_id(parent_id)
        .await?
        .ok_or(ApiError::not_found("Parent"))?;
    require_owner_or_admin(&principal, &parent)?;
    state
        .passwords
        .check_policy(&request.password)
        .map_err(|err| ApiError::Validation(err.to_string()))?;
    parent.password_hash = state
        .passwords
        .hash(&request.password)
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    parent.updated_at = Utc::now();
    state.parents.update(&parent).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ==================== Child Handlers ====================

async fn create_child<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Query(query): Query<ScopeQuery>,
    Json(request): Json<CreateChildRequest>,
) -> ApiResult<(StatusCode, [(&'static str, String); 1], Json<ChildRepresentation>)>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let parent = state.resolver().resolve_parent(&principal, query.parent_id).await?;
    let child = request.into_child(parent.id);
    state.children.create(&child).await?;
    tracing::info!(child_id = %child.id, parent_id = %parent.id, "child created");
    let location = format!("/api/children/{}", child.id);
    Ok((StatusCode::CREATED, [("Location", location)], Json(child.into())))
}

async fn list_children<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<Json<Vec<ChildRepresentation>>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let parent = state.resolver().resolve_parent(&principal, query.parent_id).await?;
    let children = state.children.get_by_parent(parent.id).await?;
    Ok(Json(children.into_iter().map(ChildRepresentation::from).collect()))
}

async fn get_child<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(child_id): Path<Uuid>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<Json<ChildRepresentation>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    Ok(Json(child.into()))
}

async fn delete_child<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(child_id): Path<Uuid>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<StatusCode>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    state.children.delete(child.id).await?;
    tracing::info!(child_id = %child.id, "child deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ==================== Word Handlers ====================

async fn create_word<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(child_id): Path<Uuid>,
    Query(query): Query<ScopeQuery>,
    Json(request): Json<CreateWordRequest>,
) -> ApiResult<(StatusCode, Json<WordRepresentation>)>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let word = request.into_word(child.id);
    state.words.create(&word).await?;
    tracing::info!(word_id = %word.id, child_id = %child.id, "word recorded");
    Ok((StatusCode::CREATED, Json(word.into())))
}

async fn list_words<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(child_id): Path<Uuid>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<Json<WordsResponse>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let words = state.words.get_by_child(child.id).await?;
    Ok(Json(words.into()))
}

async fn find_word<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(child_id): Path<Uuid>,
    Query(query): Query<WordLookupQuery>,
) -> ApiResult<Json<WordRepresentation>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let word = state
        .words
        .get_by_text(child.id, &query.word)
        .await?
        .ok_or(AccessError::word_not_found())?;
    Ok(Json(word.into()))
}

async fn delete_word<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path((child_id, word_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<StatusCode>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let word = state
        .words
        .get_by_id(child.id, word_id)
        .await?
        .ok_or(AccessError::word_not_found())?;
    state.words.delete(child.id, word.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn words_before<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path((child_id, date)): Path<(Uuid, NaiveDate)>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<Json<WordsResponse>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let words = state.words.get_before(child.id, date).await?;
    Ok(Json(words.into()))
}

async fn words_after<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path((child_id, date)): Path<(Uuid, NaiveDate)>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<Json<WordsResponse>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let words = state.words.get_after(child.id, date).await?;
    Ok(Json(words.into()))
}

async fn words_between<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(child_id): Path<Uuid>,
    Query(query): Query<RangeQuery>,
) -> ApiResult<Json<WordsResponse>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let (start, end) = validate_date_range(query.start_date, query.end_date)?;
    let words = state.words.get_between(child.id, start, end).await?;
    Ok(Json(words.into()))
}

// ==================== Milestone Handlers ====================

async fn create_milestone<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(child_id): Path<Uuid>,
    Query(query): Query<ScopeQuery>,
    Json(request): Json<CreateMilestoneRequest>,
) -> ApiResult<(StatusCode, Json<MilestoneRepresentation>)>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let milestone = request.into_milestone(child.id);
    state.milestones.create(&milestone).await?;
    tracing::info!(milestone_id = %milestone.id, child_id = %child.id, "milestone recorded");
    Ok((StatusCode::CREATED, Json(milestone.into())))
}

async fn list_milestones<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(child_id): Path<Uuid>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<Json<MilestonesResponse>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let milestones = state.milestones.get_by_child(child.id).await?;
    Ok(Json(milestones.into()))
}

async fn search_milestones_by_title<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(child_id): Path<Uuid>,
    Query(query): Query<TitleQuery>,
) -> ApiResult<Json<MilestonesResponse>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let milestones = state.milestones.search_by_title(child.id, &query.title).await?;
    Ok(Json(milestones.into()))
}

async fn find_milestone_by_title<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(child_id): Path<Uuid>,
    Query(query): Query<TitleQuery>,
) -> ApiResult<Json<MilestoneRepresentation>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let milestone = state
        .milestones
        .get_by_title(child.id, &query.title)
        .await?
        .ok_or(AccessError::milestone_not_found())?;
    Ok(Json(milestone.into()))
}

async fn update_milestone<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path((child_id, milestone_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<ScopeQuery>,
    Json(request): Json<UpdateMilestoneRequest>,
) -> ApiResult<Json<MilestoneRepresentation>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let mut milestone = state
        .milestones
        .get_by_id(child.id, milestone_id)
        .await?
        .ok_or(AccessError::milestone_not_found())?;
    request.apply_to(&mut milestone);
    state.milestones.update(&milestone).await?;
    Ok(Json(milestone.into()))
}

async fn delete_milestone<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path((child_id, milestone_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<StatusCode>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let milestone = state
        .milestones
        .get_by_id(child.id, milestone_id)
        .await?
        .ok_or(AccessError::milestone_not_found())?;
    state.milestones.delete(child.id, milestone.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn milestones_before<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path((child_id, date)): Path<(Uuid, NaiveDate)>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<Json<MilestonesResponse>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let milestones = state.milestones.get_before(child.id, date).await?;
    Ok(Json(milestones.into()))
}

async fn milestones_after<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path((child_id, date)): Path<(Uuid, NaiveDate)>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<Json<MilestonesResponse>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let milestones = state.milestones.get_after(child.id, date).await?;
    Ok(Json(milestones.into()))
}

async fn milestones_between<P, C, W, M>(
    State(state): State<ApiState<P, C, W, M>>,
    Caller(principal): Caller,
    Path(child_id): Path<Uuid>,
    Query(query): Query<RangeQuery>,
) -> ApiResult<Json<MilestonesResponse>>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    let child = state
        .resolver()
        .resolve_admin_or_owner(&principal, child_id, query.parent_id)
        .await?;
    let (start, end) = validate_date_range(query.start_date, query.end_date)?;
    let milestones = state.milestones.get_between(child.id, start, end).await?;
    Ok(Json(milestones.into()))
}

// ==================== Query Types ====================

/// Query parameters for word lookup by text.
#[derive(Debug, Clone, Deserialize)]
struct WordLookupQuery {
    /// The word to look up, matched case-insensitively.
    word: String,
    /// Parent the caller acts for. Administrators only.
    #[serde(rename = "parentID")]
    parent_id: Option<Uuid>,
}

/// Query parameters for milestone lookup by title.
#[derive(Debug, Clone, Deserialize)]
struct TitleQuery {
    /// The title to match, case-insensitively.
    title: String,
    /// Parent the caller acts for. Administrators only.
    #[serde(rename = "parentID")]
    parent_id: Option<Uuid>,
}

// ==================== Router Assembly ====================

fn parent_routes<P, C, W, M>() -> Router<ApiState<P, C, W, M>>
where
    P: ParentProvider + 'static,
    C: ChildProvider + 'static,
    W: WordProvider + 'static,
    M: MilestoneProvider + 'static,
{
    Router::new()
        .route("/api/parents", get(list_parents::<P, C, W, M>))
        .route(
            "/api/parents/{parent_id}",
            get(get_parent::<P, C, W, M>).delete(delete_parent::<P, C, W, M>),
        )
        .route(
            "/api/parents/{parent_id}/password",
            put(change_password::<P, C, W, M>),
        )
}

fn child_routes<P, C, W, M>() -> Router<ApiState<P, C, W, M>>
where
    P: ParentProvider + 'static,
    C: ChildProvider + 'static,
    W: WordProvider + 'static,
    M: MilestoneProvider + 'static,
{
    Router::new()
        .route(
            "/api/children",
            get(list_children::<P, C, W, M>).post(create_child::<P, C, W, M>),
        )
        .route(
            "/api/children/{child_id}",
            get(get_child::<P, C, W, M>).delete(delete_child::<P, C, W, M>),
        )
}

fn word_routes<P, C, W, M>() -> Router<ApiState<P, C, W, M>>
where
    P: ParentProvider + 'static,
    C: ChildProvider + 'static,
    W: WordProvider + 'static,
    M: MilestoneProvider + 'static,
{
    Router::new()
        .route(
            "/api/words/{child_id}",
            get(list_words::<P, C, W, M>).post(create_word::<P, C, W, M>),
        )
        .route("/api/words/{child_id}/word", get(find_word::<P, C, W, M>))
        .route(
            "/api/words/{child_id}/{word_id}",
            delete(delete_word::<P, C, W, M>),
        )
        .route(
            "/api/words/{child_id}/before/{date}",
            get(words_before::<P, C, W, M>),
        )
        .route(
            "/api/words/{child_id}/after/{date}",
            get(words_after::<P, C, W, M>),
        )
        .route(
            "/api/words/{child_id}/between",
            get(words_between::<P, C, W, M>),
        )
}

fn milestone_routes<P, C, W, M>() -> Router<ApiState<P, C, W, M>>
where
    P: ParentProvider + 'static,
    C: ChildProvider + 'static,
    W: WordProvider + 'static,
    M: MilestoneProvider + 'static,
{
    Router::new()
        .route(
            "/api/milestones/{child_id}",
            get(list_milestones::<P, C, W, M>).post(create_milestone::<P, C, W, M>),
        )
        .route(
            "/api/milestones/{child_id}/title",
            get(search_milestones_by_title::<P, C, W, M>),
        )
        .route(
            "/api/milestones/{child_id}/milestone",
            get(find_milestone_by_title::<P, C, W, M>),
        )
        .route(
            "/api/milestones/{child_id}/{milestone_id}",
            put(update_milestone::<P, C, W, M>).delete(delete_milestone::<P, C, W, M>),
        )
        .route(
            "/api/milestones/{child_id}/before/{date}",
            get(milestones_before::<P, C, W, M>),
        )
        .route(
            "/api/milestones/{child_id}/after/{date}",
            get(milestones_after::<P, C, W, M>),
        )
        .route(
            "/api/milestones/{child_id}/between",
            get(milestones_between::<P, C, W, M>),
        )
}

/// Builds the complete API router.
///
/// Registration is reachable without credentials. Every other route sits
/// behind the Basic authentication middleware.
pub fn api_router<P, C, W, M>(state: ApiState<P, C, W, M>) -> Router
where
    P: ParentProvider + 'static,
    C: ChildProvider + 'static,
    W: WordProvider + 'static,
    M: MilestoneProvider + 'static,
{
    let auth = state.auth_state();
    let public = Router::new().route("/api/parents", post(register_parent::<P, C, W, M>));
    let protected = Router::new()
        .merge(parent_routes())
        .merge(child_routes())
        .merge(word_routes())
        .merge(milestone_routes())
        .route_layer(middleware::from_fn_with_state(auth, basic_auth_middleware::<P>));
    public.merge(protected).with_state(state)
}
