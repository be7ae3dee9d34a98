use super::page;
use crate::flash::Flash;

pub fn render(flashes: &[Flash]) -> String {
    page(
        "Login",
        flashes,
        r#"<h1>Área administrativa</h1>
<form method="post" action="/login">
    <label>Usuário <input name="username" required></label>
    <label>Senha <input name="password" type="password" required></label>
    <button type="submit">Entrar</button>
</form>
<p><a href="/">Voltar ao site</a></p>"#,
    )
}
