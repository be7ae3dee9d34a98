use super::{e, page};
use crate::entities::{custom_section, gallery_image, lead, member};
use crate::flash::Flash;
use crate::models::settings::SiteSettings;
use crate::services::uploads::{UploadCategory, UploadStore};
use crate::store::projects::ProjectListing;

pub struct AdminPage {
    pub username: String,
    pub leads: Vec<lead::Model>,
    pub settings: SiteSettings,
    pub carousel: Vec<String>,
    pub projects: Vec<ProjectListing>,
    pub members: Vec<member::Model>,
    pub sections: Vec<custom_section::Model>,
    pub gallery: Vec<gallery_image::Model>,
}

fn delete_button(action: &str, label: &str) -> String {
    format!(
        "<form class=\"inline\" method=\"post\" action=\"{}\"><button type=\"submit\">{}</button></form>",
        e(action),
        label
    )
}

fn member_options(members: &[member::Model], selected: Option<i32>, blank: &str) -> String {
    let mut options = format!("<option value=\"\">{blank}</option>");
    for member in members {
        let sel = if selected == Some(member.id) { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            member.id,
            sel,
            e(&member.name)
        ));
    }
    options
}

fn leads_table(leads: &[lead::Model]) -> String {
    let mut html = format!(
        "<section><h2>Interessados ({})</h2><p><a href=\"/export.csv\">Exportar CSV</a></p>\
         <table><tr><th>Nome</th><th>E-mail</th><th>Tipo</th><th>Mensagem</th><th>Data</th><th></th></tr>",
        leads.len()
    );
    for lead in leads {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            e(&lead.name),
            e(&lead.email),
            e(&lead.interest),
            e(lead.message.as_deref().unwrap_or("")),
            lead.submitted_at.format("%d/%m/%Y %H:%M"),
            delete_button(&format!("/delete/{}", lead.id), "Excluir")
        ));
    }
    html.push_str("</table></section>");
    html
}

fn site_forms(settings: &SiteSettings, carousel: &[String]) -> String {
    let mut html = String::from("<section><h2>Carrossel</h2>");
    for file in carousel {
        html.push_str(&format!(
            "<div><img class=\"thumb\" src=\"{}\" alt=\"\">{}</div>",
            e(&UploadStore::url_for(UploadCategory::Carousel, file)),
            delete_button(&format!("/admin/carousel/{file}/delete"), "Remover")
        ));
    }
    html.push_str(
        r#"<form method="post" action="/admin/carousel" enctype="multipart/form-data">
    <input type="file" name="imagem" accept="image/*"> <button type="submit">Enviar</button>
</form></section>"#,
    );

    html.push_str(&format!(
        r#"<section><h2>Sobre</h2>
<form method="post" action="/admin/about" enctype="multipart/form-data">
    <textarea name="sobre_texto">{}</textarea>
    <input type="file" name="imagem" accept="image/*">
    <button type="submit">Salvar</button>
</form></section>
<section><h2>Imagem de fundo</h2>
<form method="post" action="/admin/background" enctype="multipart/form-data">
    <input type="file" name="imagem" accept="image/*"> <button type="submit">Enviar</button>
</form></section>"#,
        e(&settings.about_text)
    ));

    let contact = &settings.contact;
    html.push_str(&format!(
        r#"<section><h2>Contato</h2>
<form method="post" action="/admin/contact">
    <label>E-mail <input name="contato_email" value="{}"></label>
    <label>Telefone <input name="contato_telefone" value="{}"></label>
    <label>Endereço <input name="contato_endereco" value="{}"></label>
    <label>Instagram <input name="contato_instagram" value="{}"></label>
    <button type="submit">Salvar</button>
</form></section>"#,
        e(&contact.email),
        e(&contact.phone),
        e(&contact.address),
        e(&contact.instagram)
    ));
    html
}

fn members_section(members: &[member::Model]) -> String {
    let mut html = String::from("<section><h2>Membros</h2><ul>");
    for member in members {
        html.push_str(&format!(
            "<li>{} &lt;{}&gt; {}</li>",
            e(&member.name),
            e(&member.email),
            delete_button(&format!("/admin/members/{}/delete", member.id), "Excluir")
        ));
    }
    html.push_str(
        r#"</ul><form method="post" action="/admin/members">
    <label>Nome <input name="nome" required></label>
    <label>E-mail <input name="email" type="email" required></label>
    <button type="submit">Adicionar</button>
</form></section>"#,
    );
    html
}

fn projects_section(projects: &[ProjectListing], members: &[member::Model]) -> String {
    let mut html = String::from("<section><h2>Projetos</h2>");
    for listing in projects {
        let project = &listing.project;
        let id = project.id;
        html.push_str(&format!(
            "<article><h3>{}</h3><img class=\"thumb\" src=\"{}\" alt=\"\">",
            e(&project.title),
            e(&UploadStore::url_for(UploadCategory::Projects, &project.image))
        ));
        html.push_str(&format!(
            r#"<form method="post" action="/admin/projects/{id}/update" enctype="multipart/form-data">
    <input name="titulo" value="{}" required>
    <textarea name="descricao" required>{}</textarea>
    <input type="file" name="imagem" accept="image/*">
    <button type="submit">Atualizar</button>
</form>
<form method="post" action="/admin/projects/{id}/leader">
    <select name="lider_id">{}</select> <button type="submit">Definir líder</button>
</form>"#,
            e(&project.title),
            e(&project.description),
            member_options(members, project.leader_id, "Sem líder")
        ));

        html.push_str("<ul>");
        for member in &listing.team {
            let role = if project.leader_id == Some(member.id) { " (líder)" } else { "" };
            html.push_str(&format!(
                "<li>{}{} {}</li>",
                e(&member.name),
                role,
                delete_button(
                    &format!("/admin/projects/{id}/members/{}/remove", member.id),
                    "Remover da equipe"
                )
            ));
        }
        html.push_str(&format!(
            r#"</ul><form method="post" action="/admin/projects/{id}/members">
    <select name="membro_id" required>{}</select> <button type="submit">Adicionar à equipe</button>
</form>{}</article>"#,
            member_options(members, None, "Selecione"),
            delete_button(&format!("/admin/projects/{id}/delete"), "Excluir projeto")
        ));
    }

    html.push_str(&format!(
        r#"<h3>Novo projeto</h3>
<form method="post" action="/admin/projects" enctype="multipart/form-data">
    <input name="titulo" placeholder="Título" required>
    <textarea name="descricao" placeholder="Descrição" required></textarea>
    <select name="lider_id">{}</select>
    <input type="file" name="imagem" accept="image/*" required>
    <button type="submit">Criar</button>
</form></section>"#,
        member_options(members, None, "Sem líder")
    ));
    html
}

fn sections_section(sections: &[custom_section::Model]) -> String {
    let mut html = String::from("<section><h2>Seções personalizadas</h2>");
    for section in sections {
        let id = section.id;
        html.push_str(&format!(
            r#"<article><h3>{} <small>#{}</small></h3>
<form method="post" action="/admin/sections/{id}/update" enctype="multipart/form-data">
    <input name="titulo" value="{}" required>
    <textarea name="texto">{}</textarea>
    <input name="ordem" type="number" value="{}">
    <input type="file" name="imagem" accept="image/*">
    <button type="submit">Atualizar</button>
</form>{}</article>"#,
            e(&section.title),
            e(&section.slug),
            e(&section.title),
            e(&section.text),
            section.position,
            delete_button(&format!("/admin/sections/{id}/delete"), "Excluir")
        ));
    }
    html.push_str(
        r#"<h3>Nova seção</h3>
<form method="post" action="/admin/sections" enctype="multipart/form-data">
    <input name="titulo" placeholder="Título" required>
    <textarea name="texto" placeholder="Texto"></textarea>
    <input name="ordem" type="number" placeholder="Ordem">
    <input type="file" name="imagem" accept="image/*">
    <button type="submit">Criar</button>
</form></section>"#,
    );
    html
}

fn gallery_section(gallery: &[gallery_image::Model]) -> String {
    let mut html = String::from("<section><h2>Galeria</h2>");
    for image in gallery {
        html.push_str(&format!(
            "<div><img class=\"thumb\" src=\"{}\" alt=\"\"> #{} {}</div>",
            e(&UploadStore::url_for(UploadCategory::Gallery, &image.filename)),
            image.position,
            delete_button(&format!("/admin/gallery/{}/delete", image.id), "Remover")
        ));
    }
    html.push_str(
        r#"<form method="post" action="/admin/gallery" enctype="multipart/form-data">
    <input type="file" name="imagem" accept="image/*" required> <button type="submit">Enviar</button>
</form></section>"#,
    );
    html
}

pub fn render(data: &AdminPage, flashes: &[Flash]) -> String {
    let mut body = format!(
        "<header><h1>Painel administrativo</h1><p>Conectado como {} | <a href=\"/\">Ver site</a> | <a href=\"/logout\">Sair</a></p></header>",
        e(&data.username)
    );
    body.push_str(&leads_table(&data.leads));
    body.push_str(&site_forms(&data.settings, &data.carousel));
    body.push_str(&members_section(&data.members));
    body.push_str(&projects_section(&data.projects, &data.members));
    body.push_str(&sections_section(&data.sections));
    body.push_str(&gallery_section(&data.gallery));

    page("Painel administrativo", flashes, &body)
}
