//! Integration tests for project, character and chapter CRUD.
//!
//! Exercises the repository layer against a real database:
//! - Create then read back
//! - Full-record update and not-found on unknown ids
//! - Idempotent hard delete with no cascade
//! - Field-level project patches
//! - JSON list columns and corrupted-blob recovery

use screenplay_core::character::CharacterRelationship;
use screenplay_core::types::DbId;
use screenplay_db::models::chapter::{CreateChapter, UpdateChapter};
use screenplay_db::models::character::{CreateCharacter, UpdateCharacter};
use screenplay_db::models::project::{CreateProject, UpdateProject};
use screenplay_db::repositories::{ChapterRepo, CharacterRepo, ProjectRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str) -> CreateProject {
    CreateProject {
        title: Some(title.to_string()),
        description: Some("A story".to_string()),
        ..Default::default()
    }
}

fn new_character(project_id: DbId, name: &str) -> CreateCharacter {
    CreateCharacter {
        project_id: Some(project_id),
        name: Some(name.to_string()),
        age: Some(34),
        personality_tags: vec!["brave".to_string(), "stubborn".to_string()],
        skills: vec!["archery".to_string()],
        character_relationships: vec![CharacterRelationship {
            related_character_id: Some("c-2".to_string()),
            related_character_name: Some("Mira".to_string()),
            relationship_type: Some("sister".to_string()),
            description: None,
        }],
        ..Default::default()
    }
}

fn new_chapter(project_id: DbId, number: i32, content: Option<&str>) -> CreateChapter {
    CreateChapter {
        project_id: Some(project_id),
        episode_id: None,
        chapter_number: Some(number),
        title: Some(format!("Chapter {number}")),
        content: content.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_get_project(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("Night Train"))
        .await
        .unwrap();
    assert_eq!(created.title, "Night Train");
    assert_eq!(created.status, "CREATED");
    assert!(created.updated_at >= created.created_at);

    let found = ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("project should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.title, "Night Train");
    assert_eq!(found.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_keeps_explicit_status(pool: PgPool) {
    let mut input = new_project("Drafted");
    input.status = Some("IN_PROGRESS".to_string());
    let created = ProjectRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.status, "IN_PROGRESS");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_project_replaces_fields(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("Before"))
        .await
        .unwrap();

    let update = UpdateProject {
        title: Some("After".to_string()),
        theme: Some("redemption".to_string()),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(updated.title, "After");
    assert_eq!(updated.theme.as_deref(), Some("redemption"));
    // Omitted optional fields are cleared, omitted status is kept.
    assert_eq!(updated.description, None);
    assert_eq!(updated.status, "CREATED");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_unknown_project_returns_none(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("Untouched"))
        .await
        .unwrap();

    let update = UpdateProject {
        title: Some("Ghost".to_string()),
        ..Default::default()
    };
    let result = ProjectRepo::update(&pool, DbId::new_v4(), &update)
        .await
        .unwrap();
    assert!(result.is_none());

    let all = ProjectRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Untouched");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_field_patches(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("Patched"))
        .await
        .unwrap();

    let p = ProjectRepo::update_theme(&pool, created.id, Some("loss"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(p.theme.as_deref(), Some("loss"));

    let p = ProjectRepo::update_summary(&pool, created.id, Some("It ends."))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(p.summary.as_deref(), Some("It ends."));
    assert_eq!(p.theme.as_deref(), Some("loss"));

    let p = ProjectRepo::update_status(&pool, created.id, "COMPLETED")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(p.status, "COMPLETED");
    assert_eq!(p.title, "Patched");

    let p = ProjectRepo::update_theme(&pool, created.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(p.theme, None);

    let missing = ProjectRepo::update_status(&pool, DbId::new_v4(), "COMPLETED")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_project_twice(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("Doomed"))
        .await
        .unwrap();

    assert!(ProjectRepo::hard_delete(&pool, created.id).await.unwrap());
    assert!(!ProjectRepo::hard_delete(&pool, created.id).await.unwrap());
    assert!(ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_project_does_not_cascade(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Parent"))
        .await
        .unwrap();
    let character = CharacterRepo::create(&pool, &new_character(project.id, "Orphan"))
        .await
        .unwrap();

    ProjectRepo::hard_delete(&pool, project.id).await.unwrap();

    let still_there = CharacterRepo::find_by_id(&pool, character.id).await.unwrap();
    assert!(still_there.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_projects_newest_first(pool: PgPool) {
    let first = ProjectRepo::create(&pool, &new_project("First")).await.unwrap();
    let second = ProjectRepo::create(&pool, &new_project("Second")).await.unwrap();

    let all = ProjectRepo::list(&pool).await.unwrap();
    let ids: Vec<_> = all.iter().map(|p| p.id).collect();
    if first.created_at == second.created_at {
        assert_eq!(ids.len(), 2);
    } else {
        assert_eq!(ids, vec![second.id, first.id]);
    }
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_list_columns_round_trip(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Cast")).await.unwrap();
    let created = CharacterRepo::create(&pool, &new_character(project.id, "Ana"))
        .await
        .unwrap();

    assert_eq!(created.personality_tags, vec!["brave", "stubborn"]);
    assert_eq!(created.skills, vec!["archery"]);
    assert_eq!(created.character_relationships.len(), 1);
    assert_eq!(
        created.character_relationships[0].relationship_type.as_deref(),
        Some("sister")
    );

    let found = CharacterRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_empty_lists_stored_as_empty_arrays(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Sparse")).await.unwrap();
    let input = CreateCharacter {
        project_id: Some(project.id),
        name: Some("Nobody".to_string()),
        ..Default::default()
    };
    let created = CharacterRepo::create(&pool, &input).await.unwrap();

    let raw: (String, String, String) = sqlx::query_as(
        "SELECT personality_tags, skills, character_relationships FROM script_characters WHERE id = $1",
    )
    .bind(created.id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(raw, ("[]".to_string(), "[]".to_string(), "[]".to_string()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_corrupted_character_blob_reads_as_empty(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Corrupt")).await.unwrap();
    let created = CharacterRepo::create(&pool, &new_character(project.id, "Glitch"))
        .await
        .unwrap();

    sqlx::query("UPDATE script_characters SET skills = '{not valid}' WHERE id = $1")
        .bind(created.id)
        .execute(&pool)
        .await
        .unwrap();

    let found = CharacterRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert!(found.skills.is_empty());
    assert_eq!(found.personality_tags, vec!["brave", "stubborn"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_update_and_list_by_project(pool: PgPool) {
    let a = ProjectRepo::create(&pool, &new_project("A")).await.unwrap();
    let b = ProjectRepo::create(&pool, &new_project("B")).await.unwrap();
    let hero = CharacterRepo::create(&pool, &new_character(a.id, "Hero"))
        .await
        .unwrap();
    CharacterRepo::create(&pool, &new_character(b.id, "Villain"))
        .await
        .unwrap();

    let update = UpdateCharacter {
        name: Some("Older Hero".to_string()),
        age: Some(60),
        skills: vec!["swordplay".to_string(), "patience".to_string()],
        ..Default::default()
    };
    let updated = CharacterRepo::update(&pool, hero.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Older Hero");
    assert_eq!(updated.project_id, a.id);
    assert_eq!(updated.skills, vec!["swordplay", "patience"]);
    assert!(updated.personality_tags.is_empty());

    let in_a = CharacterRepo::list_by_project(&pool, a.id).await.unwrap();
    assert_eq!(in_a.len(), 1);
    assert_eq!(in_a[0].id, hero.id);
    assert_eq!(CharacterRepo::list(&pool).await.unwrap().len(), 2);

    assert!(CharacterRepo::update(&pool, DbId::new_v4(), &update)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Chapters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_chapter_word_count_is_derived(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Words")).await.unwrap();
    let chapter = ChapterRepo::create(&pool, &new_chapter(project.id, 1, Some("Hello world")))
        .await
        .unwrap();
    assert_eq!(chapter.word_count, 11);

    let update = UpdateChapter {
        episode_id: None,
        chapter_number: Some(1),
        title: Some("Renamed".to_string()),
        content: None,
    };
    let updated = ChapterRepo::update(&pool, chapter.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.word_count, 0);
    assert_eq!(updated.title, "Renamed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_chapter_lookup_by_number(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Numbers")).await.unwrap();
    for n in [2, 1, 3] {
        ChapterRepo::create(&pool, &new_chapter(project.id, n, None))
            .await
            .unwrap();
    }

    let all = ChapterRepo::list_by_project(&pool, project.id).await.unwrap();
    let numbers: Vec<_> = all.iter().map(|c| c.chapter_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let second = ChapterRepo::list_by_project_and_number(&pool, project.id, 2)
        .await
        .unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].title, "Chapter 2");

    let none = ChapterRepo::list_by_project_and_number(&pool, project.id, 9)
        .await
        .unwrap();
    assert!(none.is_empty());

    assert!(ChapterRepo::hard_delete(&pool, second[0].id).await.unwrap());
    assert!(!ChapterRepo::hard_delete(&pool, second[0].id).await.unwrap());
}
