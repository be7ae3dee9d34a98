use super::{e, page};
use crate::entities::{custom_section, gallery_image, member};
use crate::flash::Flash;
use crate::models::settings::SiteSettings;
use crate::services::uploads::{UploadCategory, UploadStore};
use crate::store::projects::ProjectListing;

/// Interest types offered by the contact form.
pub const INTEREST_TYPES: &[(&str, &str)] = &[
    ("voluntario", "Quero ser voluntário"),
    ("doacao", "Quero doar"),
    ("parceria", "Parceria"),
    ("outro", "Outro"),
];

pub struct PublicPage {
    pub settings: SiteSettings,
    pub carousel: Vec<String>,
    pub projects: Vec<ProjectListing>,
    pub members: Vec<member::Model>,
    pub sections: Vec<custom_section::Model>,
    pub gallery: Vec<gallery_image::Model>,
    pub is_admin: bool,
}

fn img(category: UploadCategory, filename: &str, alt: &str) -> String {
    format!(
        "<img class=\"thumb\" src=\"{}\" alt=\"{}\">",
        e(&UploadStore::url_for(category, filename)),
        e(alt)
    )
}

pub fn render(data: &PublicPage, flashes: &[Flash]) -> String {
    let mut body = String::new();

    if let Some(background) = &data.settings.background_image {
        body.push_str(&format!(
            "<style>body {{ background-image: url('{}'); background-size: cover; }}</style>",
            e(&UploadStore::url_for(UploadCategory::Sections, background))
        ));
    }

    body.push_str("<header><h1>Nossa ONG</h1>");
    if data.is_admin {
        body.push_str("<a href=\"/admin\">Painel</a>");
    } else {
        body.push_str("<a href=\"/login\">Admin</a>");
    }
    body.push_str("</header>");

    if !data.carousel.is_empty() {
        body.push_str("<section id=\"carousel\">");
        for file in &data.carousel {
            body.push_str(&img(UploadCategory::Carousel, file, "Destaque"));
        }
        body.push_str("</section>");
    }

    body.push_str("<section id=\"sobre\"><h2>Sobre nós</h2>");
    if let Some(image) = &data.settings.about_image {
        body.push_str(&img(UploadCategory::Sections, image, "Sobre nós"));
    }
    body.push_str(&format!("<p>{}</p></section>", e(&data.settings.about_text)));

    body.push_str("<section id=\"projetos\"><h2>Projetos</h2>");
    if data.projects.is_empty() {
        body.push_str("<p>Nenhum projeto cadastrado.</p>");
    }
    for listing in &data.projects {
        let project = &listing.project;
        body.push_str(&format!(
            "<article><h3>{}</h3>{}<p>{}</p>",
            e(&project.title),
            img(UploadCategory::Projects, &project.image, &project.title),
            e(&project.description)
        ));
        if let Some(leader) = &listing.leader_name {
            body.push_str(&format!("<p>Líder: {}</p>", e(leader)));
        }
        if !listing.team.is_empty() {
            let names: Vec<String> = listing.team.iter().map(|m| e(&m.name)).collect();
            body.push_str(&format!("<p>Equipe: {}</p>", names.join(", ")));
        }
        body.push_str("</article>");
    }
    body.push_str("</section>");

    if !data.members.is_empty() {
        body.push_str("<section id=\"equipe\"><h2>Nossa equipe</h2><ul>");
        for member in &data.members {
            body.push_str(&format!("<li>{}</li>", e(&member.name)));
        }
        body.push_str("</ul></section>");
    }

    for section in &data.sections {
        body.push_str(&format!("<section id=\"{}\"><h2>{}</h2>", e(&section.slug), e(&section.title)));
        if let Some(image) = &section.image {
            body.push_str(&img(UploadCategory::Sections, image, &section.title));
        }
        body.push_str(&format!("<p>{}</p></section>", e(&section.text)));
    }

    if !data.gallery.is_empty() {
        body.push_str("<section id=\"galeria\"><h2>Galeria</h2>");
        for image in &data.gallery {
            body.push_str(&img(UploadCategory::Gallery, &image.filename, "Galeria"));
        }
        body.push_str("</section>");
    }

    let contact = &data.settings.contact;
    body.push_str("<section id=\"contato\"><h2>Contato</h2>");
    for (label, value) in [
        ("E-mail", &contact.email),
        ("Telefone", &contact.phone),
        ("Endereço", &contact.address),
        ("Instagram", &contact.instagram),
    ] {
        if !value.is_empty() {
            body.push_str(&format!("<p>{}: {}</p>", label, e(value)));
        }
    }

    let mut options = String::new();
    for (value, label) in INTEREST_TYPES {
        options.push_str(&format!("<option value=\"{value}\">{label}</option>"));
    }
    body.push_str(&format!(
        r#"<form method="post" action="/">
    <label>Nome <input name="nome" required></label>
    <label>E-mail <input name="email" type="email" required></label>
    <label>Tipo de interesse <select name="tipo" required><option value="">Selecione</option>{options}</select></label>
    <label>Mensagem <textarea name="mensagem"></textarea></label>
    <button type="submit">Enviar</button>
</form></section>"#
    ));

    page("Nossa ONG", flashes, &body)
}
