use std::sync::LazyLock;

use tera::Tera;

pub const ADD_SUBSCRIPTION_TEMPLATE: &str = "add_subscription.txt";

const ADD_SUBSCRIPTION_SOURCE: &str = r#"== {{ title }} ==
{% for line in info_lines %}
  {{ line }}
{% endfor %}
[ {{ form.button_title }} ]{% if not form.button_enabled %} (disabled){% endif %}
{% if form.submitting %}  submitting...
{% endif %}{% if form.error %}  ! {{ form.error }}
{% endif %}"#;

pub static TERMINAL_TEMPLATES: LazyLock<Tera> = LazyLock::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template(ADD_SUBSCRIPTION_TEMPLATE, ADD_SUBSCRIPTION_SOURCE)
        .expect("add_subscription template must parse");
    tera
});
