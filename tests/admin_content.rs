//! Admin operations on members, projects, sections, gallery, settings and
//! uploads.

mod common;

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use common::{body_string, flashes, location, FilePart, TestApp};
use ong_portal::flash::FlashKind;
use ong_portal::models::settings::keys;
use ong_portal::services::csv_export::LEADS_HEADER;
use ong_portal::services::uploads::UploadCategory;
use ong_portal::store::projects::LEADER_REMOVAL_REJECTED;
use ong_portal::store::{gallery, leads, members, projects, sections, settings};

fn png<'a>(field: &'a str, filename: &'a str) -> Option<FilePart<'a>> {
    Some(FilePart {
        field,
        filename,
        data: b"\x89PNG fake image bytes",
    })
}

async fn add_member(app: &TestApp, cookie: &str, name: &str, email: &str) -> i32 {
    let response = app
        .post_form("/admin/members", &format!("nome={name}&email={email}"), Some(cookie))
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success);
    members::list_members(&app.state.db)
        .await
        .unwrap()
        .into_iter()
        .find(|m| m.name == name)
        .map(|m| m.id)
        .expect("member should exist")
}

async fn add_project(app: &TestApp, cookie: &str, title: &str, leader_id: Option<i32>) -> i32 {
    add_project_with_image(app, cookie, title, leader_id, &format!("{title}.png")).await
}

async fn add_project_with_image(
    app: &TestApp,
    cookie: &str,
    title: &str,
    leader_id: Option<i32>,
    image: &str,
) -> i32 {
    let leader = leader_id.map(|id| id.to_string()).unwrap_or_default();
    let response = app
        .post_multipart(
            "/admin/projects",
            &[("titulo", title), ("descricao", "Descrição do projeto"), ("lider_id", leader.as_str())],
            png("imagem", image),
            Some(cookie),
        )
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success, "{:?}", flashes(&response));
    projects::list_projects(&app.state.db)
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.project.title == title)
        .map(|p| p.project.id)
        .expect("project should exist")
}

async fn team_ids(app: &TestApp, project_id: i32) -> Vec<i32> {
    let mut ids: Vec<i32> = projects::team_of(&app.state.db, project_id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    ids.sort();
    ids
}

#[tokio::test]
async fn disallowed_extension_is_rejected_and_nothing_is_written() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let response = app
        .post_multipart(
            "/admin/gallery",
            &[],
            Some(FilePart {
                field: "imagem",
                filename: "script.php",
                data: b"<?php echo 1;",
            }),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
    assert_eq!(flashes(&response)[0].kind, FlashKind::Danger);

    assert!(gallery::list_images(&app.state.db).await.unwrap().is_empty());
    assert!(app.state.uploads.list(UploadCategory::Gallery).await.unwrap().is_empty());
    assert!(!app.state.uploads.path_for(UploadCategory::Gallery, "script.php").exists());
}

#[tokio::test]
async fn upload_without_a_file_is_rejected() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let response = app.post_multipart("/admin/carousel", &[], None, Some(&cookie)).await;
    let messages = flashes(&response);
    assert_eq!(messages[0].kind, FlashKind::Danger);
    assert_eq!(messages[0].message, "Nenhum arquivo selecionado.");
}

#[tokio::test]
async fn gallery_appends_with_max_plus_one_ordering() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    for name in ["a.png", "b.jpg"] {
        app.post_multipart("/admin/gallery", &[], png("imagem", name), Some(&cookie))
            .await;
    }
    let images = gallery::list_images(&app.state.db).await.unwrap();
    let positions: Vec<i32> = images.iter().map(|i| i.position).collect();
    assert_eq!(positions, vec![1, 2]);

    let first = images[0].id;
    let response = app
        .post_form(&format!("/admin/gallery/{first}/delete"), "", Some(&cookie))
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success);
    assert!(!app.state.uploads.path_for(UploadCategory::Gallery, "a.png").exists());

    app.post_multipart("/admin/gallery", &[], png("imagem", "c.webp"), Some(&cookie))
        .await;
    let positions: Vec<i32> = gallery::list_images(&app.state.db)
        .await
        .unwrap()
        .iter()
        .map(|i| i.position)
        .collect();
    assert_eq!(positions, vec![2, 3]);
}

#[tokio::test]
async fn carousel_is_the_directory_listing() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    app.post_multipart("/admin/carousel", &[], png("imagem", "Banner 1.png"), Some(&cookie))
        .await;
    assert_eq!(
        app.state.uploads.list(UploadCategory::Carousel).await.unwrap(),
        vec!["Banner_1.png".to_string()]
    );

    let body = body_string(app.get("/", None).await).await;
    assert!(body.contains("/uploads/carousel/Banner_1.png"));

    let response = app
        .post_form("/admin/carousel/Banner_1.png/delete", "", Some(&cookie))
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success);
    assert!(app.state.uploads.list(UploadCategory::Carousel).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_member_clears_project_leadership() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let maria = add_member(&app, &cookie, "Maria", "maria%40ong.org").await;
    let project_id = add_project(&app, &cookie, "Horta", Some(maria)).await;

    let project = projects::find_project(&app.state.db, project_id).await.unwrap();
    assert_eq!(project.leader_id, Some(maria));
    assert_eq!(team_ids(&app, project_id).await, vec![maria]);

    let response = app
        .post_form(&format!("/admin/members/{maria}/delete"), "", Some(&cookie))
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success);

    let project = projects::find_project(&app.state.db, project_id).await.unwrap();
    assert_eq!(project.leader_id, None);
    assert!(team_ids(&app, project_id).await.is_empty());
}

#[tokio::test]
async fn duplicate_member_email_is_a_conflict() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    add_member(&app, &cookie, "Maria", "maria%40ong.org").await;
    let response = app
        .post_form("/admin/members", "nome=Outra&email=maria%40ong.org", Some(&cookie))
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Danger);
    assert_eq!(members::list_members(&app.state.db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn current_leader_cannot_leave_the_team_until_replaced() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let ana = add_member(&app, &cookie, "Ana", "ana%40ong.org").await;
    let beto = add_member(&app, &cookie, "Beto", "beto%40ong.org").await;
    let project_id = add_project(&app, &cookie, "Biblioteca", Some(ana)).await;

    let remove_ana = format!("/admin/projects/{project_id}/members/{ana}/remove");
    let response = app.post_form(&remove_ana, "", Some(&cookie)).await;
    let messages = flashes(&response);
    assert_eq!(messages[0].kind, FlashKind::Danger);
    assert_eq!(messages[0].message, LEADER_REMOVAL_REJECTED);
    assert_eq!(team_ids(&app, project_id).await, vec![ana]);

    let response = app
        .post_form(
            &format!("/admin/projects/{project_id}/leader"),
            &format!("lider_id={beto}"),
            Some(&cookie),
        )
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success);
    assert_eq!(team_ids(&app, project_id).await, vec![ana, beto]);

    let response = app.post_form(&remove_ana, "", Some(&cookie)).await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success);
    assert_eq!(team_ids(&app, project_id).await, vec![beto]);

    let project = projects::find_project(&app.state.db, project_id).await.unwrap();
    assert_eq!(project.leader_id, Some(beto));
}

#[tokio::test]
async fn team_membership_is_insert_or_ignore() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let ana = add_member(&app, &cookie, "Ana", "ana%40ong.org").await;
    let project_id = add_project(&app, &cookie, "Coral", None).await;
    let uri = format!("/admin/projects/{project_id}/members");

    for _ in 0..2 {
        let response = app
            .post_form(&uri, &format!("membro_id={ana}"), Some(&cookie))
            .await;
        assert_eq!(flashes(&response)[0].kind, FlashKind::Success);
    }
    assert_eq!(team_ids(&app, project_id).await, vec![ana]);

    let response = app
        .post_form(&format!("/admin/projects/{project_id}/leader"), "lider_id=", Some(&cookie))
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success);
    let project = projects::find_project(&app.state.db, project_id).await.unwrap();
    assert_eq!(project.leader_id, None);
}

#[tokio::test]
async fn project_requires_an_image_and_writes_nothing_when_invalid() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let response = app
        .post_multipart(
            "/admin/projects",
            &[("titulo", "Sem imagem"), ("descricao", "Texto")],
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Danger);

    let response = app
        .post_multipart(
            "/admin/projects",
            &[("titulo", ""), ("descricao", "Texto")],
            png("imagem", "orfa.png"),
            Some(&cookie),
        )
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Danger);
    assert!(!app.state.uploads.path_for(UploadCategory::Projects, "orfa.png").exists());

    assert!(projects::list_projects(&app.state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn replacing_a_project_image_deletes_the_old_file() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let project_id = add_project(&app, &cookie, "Oficina", None).await;
    let uploads = &app.state.uploads;
    assert!(uploads.path_for(UploadCategory::Projects, "Oficina.png").exists());

    let update = format!("/admin/projects/{project_id}/update");
    let fields = [("titulo", "Oficina de Arte"), ("descricao", "Nova descrição")];

    app.post_multipart(&update, &fields, png("imagem", "nova.png"), Some(&cookie))
        .await;
    let project = projects::find_project(&app.state.db, project_id).await.unwrap();
    assert_eq!(project.title, "Oficina de Arte");
    assert_eq!(project.image, "nova.png");
    assert!(!uploads.path_for(UploadCategory::Projects, "Oficina.png").exists());
    assert!(uploads.path_for(UploadCategory::Projects, "nova.png").exists());

    // same name overwrites in place and must survive
    app.post_multipart(&update, &fields, png("imagem", "nova.png"), Some(&cookie))
        .await;
    assert!(uploads.path_for(UploadCategory::Projects, "nova.png").exists());

    // no file keeps the current image
    app.post_multipart(&update, &fields, None, Some(&cookie)).await;
    let project = projects::find_project(&app.state.db, project_id).await.unwrap();
    assert_eq!(project.image, "nova.png");

    let response = app
        .post_form(&format!("/admin/projects/{project_id}/delete"), "", Some(&cookie))
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success);
    assert!(!uploads.path_for(UploadCategory::Projects, "nova.png").exists());
}

#[tokio::test]
async fn section_titles_must_have_distinct_slugs() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let response = app
        .post_multipart(
            "/admin/sections",
            &[("titulo", "Nossa História"), ("texto", "Desde 2001")],
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success);

    let response = app
        .post_multipart(
            "/admin/sections",
            &[("titulo", "nossa historia"), ("texto", "Duplicada")],
            png("imagem", "duplicada.png"),
            Some(&cookie),
        )
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Danger);
    assert!(!app.state.uploads.path_for(UploadCategory::Sections, "duplicada.png").exists());

    let all = sections::list_sections(&app.state.db).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].slug, "nossa-historia");
    assert_eq!(all[0].position, 1);
}

#[tokio::test]
async fn sections_default_to_the_end_of_the_order() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    for (title, position) in [("Primeira", "5"), ("Segunda", "")] {
        app.post_multipart(
            "/admin/sections",
            &[("titulo", title), ("texto", "..."), ("ordem", position)],
            None,
            Some(&cookie),
        )
        .await;
    }
    let positions: Vec<(String, i32)> = sections::list_sections(&app.state.db)
        .await
        .unwrap()
        .into_iter()
        .map(|s| (s.title, s.position))
        .collect();
    assert_eq!(
        positions,
        vec![("Primeira".to_string(), 5), ("Segunda".to_string(), 6)]
    );

    let id = sections::list_sections(&app.state.db).await.unwrap()[0].id;
    let response = app
        .post_form(&format!("/admin/sections/{id}/delete"), "", Some(&cookie))
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success);
    assert_eq!(sections::list_sections(&app.state.db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn contact_settings_are_overwritten_and_shown() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    for email in ["antigo%40ong.org", "novo%40ong.org"] {
        let response = app
            .post_form(
                "/admin/contact",
                &format!("contato_email={email}&contato_telefone=1234&contato_endereco=&contato_instagram=%40ong"),
                Some(&cookie),
            )
            .await;
        assert_eq!(flashes(&response)[0].kind, FlashKind::Success);
    }

    assert_eq!(
        settings::get(&app.state.db, keys::CONTACT_EMAIL).await.unwrap().as_deref(),
        Some("novo@ong.org")
    );
    let all = settings::all(&app.state.db).await.unwrap();
    assert_eq!(all.get(keys::CONTACT_INSTAGRAM).map(String::as_str), Some("@ong"));

    let body = body_string(app.get("/", None).await).await;
    assert!(body.contains("novo@ong.org"));
    assert!(!body.contains("antigo@ong.org"));
}

#[tokio::test]
async fn about_and_background_images_replace_their_predecessors() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;
    let uploads = &app.state.uploads;

    app.post_multipart(
        "/admin/about",
        &[("sobre_texto", "Somos uma ONG.")],
        png("imagem", "sobre1.png"),
        Some(&cookie),
    )
    .await;
    app.post_multipart(
        "/admin/about",
        &[("sobre_texto", "Somos uma ONG de bairro.")],
        png("imagem", "sobre2.png"),
        Some(&cookie),
    )
    .await;

    assert_eq!(
        settings::get(&app.state.db, keys::ABOUT_TEXT).await.unwrap().as_deref(),
        Some("Somos uma ONG de bairro.")
    );
    assert_eq!(
        settings::get(&app.state.db, keys::ABOUT_IMAGE).await.unwrap().as_deref(),
        Some("sobre2.png")
    );
    assert!(!uploads.path_for(UploadCategory::Sections, "sobre1.png").exists());

    app.post_multipart("/admin/background", &[], png("imagem", "fundo.jpg"), Some(&cookie))
        .await;
    assert_eq!(
        settings::get(&app.state.db, keys::BACKGROUND_IMAGE).await.unwrap().as_deref(),
        Some("fundo.jpg")
    );
    assert!(app.state.uploads.list(UploadCategory::Carousel).await.unwrap().is_empty());
}

#[tokio::test]
async fn csv_export_lists_leads_newest_first() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    leads::create_lead(&app.state.db, "Primeiro", "p@ex.org", "doacao", "")
        .await
        .unwrap();
    leads::create_lead(&app.state.db, "Segundo", "s@ex.org", "outro", "Olá, \"equipe\"")
        .await
        .unwrap();

    let response = app.get("/export.csv", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        response.headers().get(CONTENT_DISPOSITION).unwrap(),
        "attachment;filename=interessados.csv"
    );

    let body = body_string(response).await;
    let lines: Vec<&str> = body.split("\r\n").filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], LEADS_HEADER.join(","));
    assert!(lines[1].contains("Segundo"));
    assert!(lines[1].contains("\"Olá, \"\"equipe\"\"\""));
    assert!(lines[2].contains("Primeiro"));
}

#[tokio::test]
async fn deleting_a_lead_removes_it() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let lead = leads::create_lead(&app.state.db, "Carla", "c@ex.org", "voluntario", "")
        .await
        .unwrap();

    let response = app
        .post_form(&format!("/delete/{}", lead.id), "", Some(&cookie))
        .await;
    assert_eq!(location(&response), "/admin");
    assert_eq!(flashes(&response)[0].message, "Registro excluído.");
    assert_eq!(leads::count_leads(&app.state.db).await.unwrap(), 0);

    let response = app
        .post_form(&format!("/delete/{}", lead.id), "", Some(&cookie))
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Warning);
}

#[tokio::test]
async fn shared_project_image_survives_until_its_last_project_goes() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;
    let uploads = &app.state.uploads;

    let first = add_project_with_image(&app, &cookie, "Horta", None, "foto.png").await;
    let second = add_project_with_image(&app, &cookie, "Coral", None, "foto.png").await;
    let third = add_project_with_image(&app, &cookie, "Teatro", None, "foto.png").await;

    let response = app
        .post_form(&format!("/admin/projects/{first}/delete"), "", Some(&cookie))
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success);
    assert!(uploads.path_for(UploadCategory::Projects, "foto.png").exists());

    // re-imaging one project must not pull the file from under the other
    app.post_multipart(
        &format!("/admin/projects/{second}/update"),
        &[("titulo", "Coral"), ("descricao", "Nova descrição")],
        png("imagem", "coral.png"),
        Some(&cookie),
    )
    .await;
    assert!(uploads.path_for(UploadCategory::Projects, "foto.png").exists());
    let remaining = projects::find_project(&app.state.db, third).await.unwrap();
    assert_eq!(remaining.image, "foto.png");

    app.post_form(&format!("/admin/projects/{third}/delete"), "", Some(&cookie))
        .await;
    assert!(!uploads.path_for(UploadCategory::Projects, "foto.png").exists());
    assert!(uploads.path_for(UploadCategory::Projects, "coral.png").exists());
}

#[tokio::test]
async fn shared_gallery_file_survives_until_its_last_entry_goes() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    for _ in 0..2 {
        app.post_multipart("/admin/gallery", &[], png("imagem", "mutirao.png"), Some(&cookie))
            .await;
    }
    let images = gallery::list_images(&app.state.db).await.unwrap();
    assert_eq!(images.len(), 2);

    app.post_form(&format!("/admin/gallery/{}/delete", images[0].id), "", Some(&cookie))
        .await;
    assert!(app.state.uploads.path_for(UploadCategory::Gallery, "mutirao.png").exists());

    app.post_form(&format!("/admin/gallery/{}/delete", images[1].id), "", Some(&cookie))
        .await;
    assert!(!app.state.uploads.path_for(UploadCategory::Gallery, "mutirao.png").exists());
}

#[tokio::test]
async fn section_cleanup_keeps_files_the_site_settings_use() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;
    let uploads = &app.state.uploads;

    app.post_multipart("/admin/background", &[], png("imagem", "fundo.png"), Some(&cookie))
        .await;
    app.post_multipart(
        "/admin/sections",
        &[("titulo", "Eventos"), ("texto", "Agenda")],
        png("imagem", "fundo.png"),
        Some(&cookie),
    )
    .await;
    let section = sections::list_sections(&app.state.db).await.unwrap().remove(0);
    assert_eq!(section.image.as_deref(), Some("fundo.png"));

    let response = app
        .post_form(&format!("/admin/sections/{}/delete", section.id), "", Some(&cookie))
        .await;
    assert_eq!(flashes(&response)[0].kind, FlashKind::Success);
    assert_eq!(
        settings::get(&app.state.db, keys::BACKGROUND_IMAGE).await.unwrap().as_deref(),
        Some("fundo.png")
    );
    assert!(uploads.path_for(UploadCategory::Sections, "fundo.png").exists());
}

#[tokio::test]
async fn replacing_the_about_image_keeps_a_file_a_section_shows() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;
    let uploads = &app.state.uploads;

    app.post_multipart(
        "/admin/about",
        &[("sobre_texto", "Quem somos")],
        png("imagem", "equipe.png"),
        Some(&cookie),
    )
    .await;
    app.post_multipart(
        "/admin/sections",
        &[("titulo", "Voluntários"), ("texto", "Nosso time")],
        png("imagem", "equipe.png"),
        Some(&cookie),
    )
    .await;

    app.post_multipart(
        "/admin/about",
        &[("sobre_texto", "Quem somos")],
        png("imagem", "sede.png"),
        Some(&cookie),
    )
    .await;
    assert_eq!(
        settings::get(&app.state.db, keys::ABOUT_IMAGE).await.unwrap().as_deref(),
        Some("sede.png")
    );
    assert!(uploads.path_for(UploadCategory::Sections, "equipe.png").exists());
}

#[tokio::test]
async fn unknown_ids_from_stale_forms_become_flash_messages() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let ana = add_member(&app, &cookie, "Ana", "ana%40ong.org").await;
    let project_id = add_project(&app, &cookie, "Creche", None).await;

    let cases = [
        (format!("/admin/projects/{project_id}/leader"), "lider_id=9999".to_string()),
        (format!("/admin/projects/9999/leader"), format!("lider_id={ana}")),
        (format!("/admin/projects/{project_id}/members"), "membro_id=9999".to_string()),
        (format!("/admin/projects/9999/members"), format!("membro_id={ana}")),
        (format!("/admin/projects/9999/members/{ana}/remove"), String::new()),
        ("/admin/members/9999/delete".to_string(), String::new()),
    ];
    for (uri, body) in cases {
        let response = app.post_form(&uri, &body, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "POST {uri}");
        assert_eq!(location(&response), "/admin", "POST {uri}");
        assert_eq!(flashes(&response)[0].kind, FlashKind::Danger, "POST {uri}");
    }

    let project = projects::find_project(&app.state.db, project_id).await.unwrap();
    assert_eq!(project.leader_id, None);
    assert!(team_ids(&app, project_id).await.is_empty());
}
