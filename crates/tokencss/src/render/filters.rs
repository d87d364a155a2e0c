//! MiniJinja filter registration.

use minijinja::Environment;

use crate::css::custom_property_name;

/// Registers the stylesheet filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // Flat key to custom-property name.
    // Usage: {{ decl.key | custom_property }} outputs --color-bg for color.bg
    env.add_filter("custom_property", |key: String| -> String {
        custom_property_name(&key)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_custom_property_filter() {
        let mut env = Environment::new();
        register_filters(&mut env);
        let output = env
            .render_str("{{ key | custom_property }}", context! { key => "color.brand.primary" })
            .unwrap();
        assert_eq!(output, "--color-brand-primary");
    }
}
