use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Linked,
    ModelTrait, QueryFilter, QueryOrder, RelationDef, RelationTrait, Set, TransactionTrait,
};

use super::members::find_member;
use super::non_blank;
use crate::entities::project::{self, Entity as Project};
use crate::entities::{member, project_member};
use crate::error::{AppError, AppResult};

pub const LEADER_REMOVAL_REJECTED: &str =
    "Não é possível remover o líder atual da equipe. Defina outro líder primeiro.";

/// Project → its leader, a nullable belongs-to distinct from the team
/// relation.
pub struct ProjectLeader;

impl Linked for ProjectLeader {
    type FromEntity = project::Entity;
    type ToEntity = member::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![project::Relation::Leader.def()]
    }
}

/// A project as shown on the site: the row, its leader's display name and its
/// team.
#[derive(Clone, Debug)]
pub struct ProjectListing {
    pub project: project::Model,
    pub leader_name: Option<String>,
    pub team: Vec<member::Model>,
}

#[derive(Clone, Debug)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image: String,
    pub leader_id: Option<i32>,
}

/// Title and description are required on create and update.
pub fn validate_fields(title: &str, description: &str) -> AppResult<()> {
    if non_blank(title).is_none() || non_blank(description).is_none() {
        return Err(AppError::Validation(
            "Título e descrição do projeto são obrigatórios.".to_string(),
        ));
    }
    Ok(())
}

pub async fn find_project(db: &DatabaseConnection, id: i32) -> AppResult<project::Model> {
    Project::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("Projeto não encontrado.".to_string()))
}

/// Projects newest first, leader left-joined, teams grouped per project.
pub async fn list_projects(db: &DatabaseConnection) -> AppResult<Vec<ProjectListing>> {
    let rows = Project::find()
        .find_also_linked(ProjectLeader)
        .order_by_desc(project::Column::CreatedAt)
        .order_by_desc(project::Column::Id)
        .all(db)
        .await?;

    let memberships = project_member::Entity::find()
        .find_also_related(member::Entity)
        .order_by_asc(member::Column::Name)
        .all(db)
        .await?;

    let mut teams: HashMap<i32, Vec<member::Model>> = HashMap::new();
    for (link, member) in memberships {
        if let Some(member) = member {
            teams.entry(link.project_id).or_default().push(member);
        }
    }

    Ok(rows
        .into_iter()
        .map(|(project, leader)| ProjectListing {
            team: teams.remove(&project.id).unwrap_or_default(),
            leader_name: leader.map(|m| m.name),
            project,
        })
        .collect())
}

pub async fn team_of(db: &DatabaseConnection, project_id: i32) -> AppResult<Vec<member::Model>> {
    let project = find_project(db, project_id).await?;
    Ok(project
        .find_related(member::Entity)
        .order_by_asc(member::Column::Name)
        .all(db)
        .await?)
}

/// Insert a project whose image is already stored. A leader, when given, must
/// exist and joins the team.
pub async fn create_project(db: &DatabaseConnection, input: NewProject) -> AppResult<project::Model> {
    validate_fields(&input.title, &input.description)?;
    if let Some(leader_id) = input.leader_id {
        find_member(db, leader_id).await.map_err(|_| {
            AppError::Validation("O líder escolhido não existe.".to_string())
        })?;
    }

    let txn = db.begin().await?;
    let project = project::ActiveModel {
        title: Set(input.title.trim().to_string()),
        description: Set(input.description.trim().to_string()),
        image: Set(input.image),
        created_at: Set(chrono::Utc::now().naive_utc()),
        leader_id: Set(input.leader_id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if let Some(leader_id) = project.leader_id {
        project_member::Entity::insert(project_member::ActiveModel {
            project_id: Set(project.id),
            member_id: Set(leader_id),
        })
        .exec_without_returning(&txn)
        .await?;
    }
    txn.commit().await?;

    tracing::info!(project_id = project.id, title = %project.title, "project created");
    Ok(project)
}

/// Update text fields and optionally point at a new image. Returns the updated
/// row and, when the image changed, the previous file name.
pub async fn update_project(
    db: &DatabaseConnection,
    id: i32,
    title: &str,
    description: &str,
    image: Option<String>,
) -> AppResult<(project::Model, Option<String>)> {
    validate_fields(title, description)?;
    let existing = find_project(db, id).await?;
    let previous_image = image.as_ref().map(|_| existing.image.clone());

    let mut active = existing.into_active_model();
    active.title = Set(title.trim().to_string());
    active.description = Set(description.trim().to_string());
    if let Some(image) = image {
        active.image = Set(image);
    }
    let updated = active.update(db).await?;

    tracing::info!(project_id = id, "project updated");
    Ok((updated, previous_image))
}

/// Delete a project and its team rows. The caller removes the image file.
pub async fn delete_project(db: &DatabaseConnection, id: i32) -> AppResult<project::Model> {
    let project = find_project(db, id).await?;

    let txn = db.begin().await?;
    project_member::Entity::delete_many()
        .filter(project_member::Column::ProjectId.eq(id))
        .exec(&txn)
        .await?;
    Project::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(project_id = id, "project deleted");
    Ok(project)
}

/// Set or clear the leader. A new leader is added to the team if absent.
pub async fn set_leader(
    db: &DatabaseConnection,
    project_id: i32,
    leader_id: Option<i32>,
) -> AppResult<project::Model> {
    let project = find_project(db, project_id).await?;
    if let Some(leader_id) = leader_id {
        find_member(db, leader_id).await?;
    }

    let mut active = project.into_active_model();
    active.leader_id = Set(leader_id);
    let project = active.update(db).await?;

    if let Some(leader_id) = leader_id {
        add_team_member(db, project_id, leader_id).await?;
    }

    tracing::info!(project_id, leader_id = ?leader_id, "project leader set");
    Ok(project)
}

/// Insert-or-ignore a team membership. Returns `true` when a row was added.
pub async fn add_team_member(
    db: &DatabaseConnection,
    project_id: i32,
    member_id: i32,
) -> AppResult<bool> {
    find_project(db, project_id).await?;
    find_member(db, member_id).await?;

    let existing = project_member::Entity::find_by_id((project_id, member_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(false);
    }

    project_member::Entity::insert(project_member::ActiveModel {
        project_id: Set(project_id),
        member_id: Set(member_id),
    })
    .exec_without_returning(db)
    .await?;
    Ok(true)
}

/// Remove a team membership. The current leader cannot be removed.
pub async fn remove_team_member(
    db: &DatabaseConnection,
    project_id: i32,
    member_id: i32,
) -> AppResult<()> {
    let project = find_project(db, project_id).await?;
    if project.leader_id == Some(member_id) {
        return Err(AppError::Validation(LEADER_REMOVAL_REJECTED.to_string()));
    }

    let result = project_member::Entity::delete_by_id((project_id, member_id))
        .exec(db)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::Validation(
            "Esse membro não faz parte da equipe.".to_string(),
        ));
    }
    Ok(())
}
