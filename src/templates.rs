use handlebars::{handlebars_helper, Handlebars, TemplateError};

pub const INDEX: &str = "index";
pub const DETAIL: &str = "detail";
pub const RESULTS: &str = "results";

handlebars_helper!(pluralize: |count: i64| if count == 1 { "" } else { "s" });

/**
 * Build the handlebars registry with every page template compiled in
 */
pub fn registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut hb = Handlebars::new();
    hb.register_helper("pluralize", Box::new(pluralize));
    hb.register_template_string(INDEX, include_str!("../templates/index.hbs"))?;
    hb.register_template_string(DETAIL, include_str!("../templates/detail.hbs"))?;
    hb.register_template_string(RESULTS, include_str!("../templates/results.hbs"))?;
    Ok(hb)
}
