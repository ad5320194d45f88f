use ezpresso::error::Error;
use ezpresso::renderer::{MiniJinjaRenderer, TemplateRenderer};
use serde_json::json;

#[test]
fn test_variable_substitution() {
    let renderer = MiniJinjaRenderer::new();
    let context = json!({ "name": "user", "Name": "User" });

    let result = renderer.render("export const {{ Name }} = '{{ name }}';", &context).unwrap();
    assert_eq!(result, "export const User = 'user';");
}

#[test]
fn test_capitalize_filter_leaves_tail_unchanged() {
    let renderer = MiniJinjaRenderer::new();
    let context = json!({ "name": "uSeR" });

    // The builtin capitalize would lower-case the tail; ours must not.
    let result = renderer.render("{{ name | capitalize }}", &context).unwrap();
    assert_eq!(result, "USeR");
}

#[test]
fn test_rendering_is_deterministic() {
    let renderer = MiniJinjaRenderer::new();
    let context = json!({
        "name": "user",
        "Name": "User",
        "fields": [{ "name": "email", "type": "String", "required": true }]
    });
    let template = "{{ Name }}: {% for f in fields %}{{ f.name }}={{ f.required }}{% endfor %}";

    let first = renderer.render(template, &context).unwrap();
    let second = renderer.render(template, &context).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, "User: email=true");
}

#[test]
fn test_field_loop_rendering() {
    let renderer = MiniJinjaRenderer::new();
    let context = json!({
        "fields": [
            { "name": "email", "type": "String", "required": true },
            { "name": "age", "type": "Number", "required": false },
        ]
    });
    let template = "{% for f in fields %}{{ f.name }}:{{ f.type }}:{{ f.required }};{% endfor %}";

    let result = renderer.render(template, &context).unwrap();
    assert_eq!(result, "email:String:true;age:Number:false;");
}

#[test]
fn test_malformed_template_fails_with_render_error() {
    let renderer = MiniJinjaRenderer::new();
    let context = json!({ "name": "user" });

    let result = renderer.render("{% for x in %}", &context);
    assert!(matches!(result, Err(Error::MinijinjaError(_))));
}
