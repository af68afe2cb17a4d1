//! Templates Tera embarqués dans le binaire

use tera::Tera;

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("result.html", include_str!("../templates/result.html")),
    ("error.html", include_str!("../templates/error.html")),
];

/// Charge les templates; l'échappement HTML reste actif pour les .html
pub fn load() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.to_vec())?;
    Ok(tera)
}
