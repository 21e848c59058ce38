//! `{{placeholder}}` substitution

use crate::config::GeneratorConfig;
use crate::options::{DerivedIdentity, ScaffoldOptions};
use std::collections::BTreeMap;

const GULP_VERSION: &str = "^3.9.0";
const BOOTSTRAP_VERSION: &str = "^3.3.6";
const JQUERY_VERSION: &str = "^2.2.0";

const GULP_BOOTSTRAP_TASK: &str = "
gulp.task('bootstrap', function () {
    gulp.src('./node_modules/jquery/dist/jquery.min.js')
        .pipe(gulp.dest(paths.webroot + 'lib/jquery'));
    return gulp.src('./node_modules/bootstrap/dist/**/*')
        .pipe(gulp.dest(paths.webroot + 'lib/bootstrap'));
});
";

/// Variables available to templates
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(
        options: &ScaffoldOptions,
        identity: &DerivedIdentity,
        config: &GeneratorConfig,
    ) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert("app_name", options.app_name.clone());
        variables.insert("app_name_html", razor_text(&options.app_name));
        variables.insert("namespace", identity.namespace.clone());
        variables.insert("package_name", identity.package_name.clone());
        variables.insert("slug", identity.slug());
        variables.insert("web_port", config.web_port.to_string());
        variables.insert("package_dev_dependencies", dev_dependencies(options));

        let bootstrap_task = if options.use_bootstrap {
            GULP_BOOTSTRAP_TASK
        } else {
            ""
        };
        variables.insert("gulp_bootstrap_task", bootstrap_task.to_string());

        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every known `{{name}}` in one pass; unknown placeholders stay
    /// as written and substituted values are never re-scanned.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find("}}") else {
                rest = &rest[start..];
                break;
            };

            match self.variables.get(&after[..end]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str("{{");
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Escape text for a Razor view: HTML entities, and `@@` so Razor does not
/// read the name as code
fn razor_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '@' => out.push_str("@@"),
            _ => out.push(c),
        }
    }
    out
}

/// `devDependencies` object for package.json
fn dev_dependencies(options: &ScaffoldOptions) -> String {
    let mut deps = Vec::new();
    if options.use_gulp {
        deps.push(("gulp", GULP_VERSION));
    }
    if options.use_bootstrap {
        deps.push(("bootstrap", BOOTSTRAP_VERSION));
        deps.push(("jquery", JQUERY_VERSION));
    }

    if deps.is_empty() {
        return "{}".to_string();
    }

    let entries: Vec<String> = deps
        .iter()
        .map(|(name, version)| format!("    \"{}\": \"{}\"", name, version))
        .collect();
    format!("{{\n{}\n  }}", entries.join(",\n"))
}
