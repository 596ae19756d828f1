//! Deterministic rendering of Mockito test scaffolds.
//!
//! Every function here is a pure function of the component; identical input
//! renders byte-identical output, which is what makes repeat runs of the
//! writer idempotent.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::domain::{Component, ComponentKind};

const BASE_IMPORTS: [&str; 6] = [
    "org.junit.Assert",
    "org.junit.Test",
    "org.junit.runner.RunWith",
    "org.mockito.Mock",
    "org.mockito.Mockito",
    "org.mockito.junit.MockitoJUnitRunner",
];

/// Assemble the deduplicated, lexicographically sorted import list for a
/// component's scaffold: the JUnit/Mockito baseline, kind-specific Android
/// types, and the component's own qualified name.
pub fn generate_imports(component: &Component) -> Vec<String> {
    let mut imports: BTreeSet<String> = BASE_IMPORTS.iter().map(|item| item.to_string()).collect();

    if component.kind.is_lifecycle() {
        imports.insert("android.content.Context".to_string());
        imports.insert("android.content.Intent".to_string());
        imports.insert("android.util.Log".to_string());
    }
    match component.kind {
        ComponentKind::Activity => {
            imports.insert("android.app.Activity".to_string());
        }
        ComponentKind::Service => {
            imports.insert("android.app.Service".to_string());
        }
        ComponentKind::BroadcastReceiver => {
            imports.insert("android.content.BroadcastReceiver".to_string());
        }
        ComponentKind::ViewModel => {
            imports.insert("androidx.lifecycle.SavedStateHandle".to_string());
            imports.insert("androidx.lifecycle.ViewModel".to_string());
        }
    }
    imports.insert(component.qualified_name());

    imports.into_iter().collect()
}

fn mock_fields(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::ViewModel => "    @Mock SavedStateHandle savedStateHandle;\n",
        _ => "    @Mock Context context;\n    @Mock Intent intent;\n",
    }
}

fn resolution_tests(component: &Component) -> String {
    let qualified = component.qualified_name();
    let mut output = String::new();
    let _ = writeln!(output, "    @Test");
    let _ = writeln!(
        output,
        "    public void resolvesClassByName() throws Exception {{"
    );
    let _ = writeln!(
        output,
        "        Class<?> clazz = Class.forName(\"{qualified}\");"
    );
    let _ = writeln!(output, "        Assert.assertNotNull(clazz);");
    let _ = writeln!(output, "    }}");
    let _ = writeln!(output);
    let _ = writeln!(output, "    @Test(expected = ClassNotFoundException.class)");
    let _ = writeln!(
        output,
        "    public void invalidClassNameThrows() throws Exception {{"
    );
    let _ = writeln!(output, "        Class.forName(\"{qualified}_Missing\");");
    let _ = writeln!(output, "    }}");
    output
}

fn mock_construction_test(component: &Component) -> String {
    let name = &component.name;
    let collaborator = match component.kind {
        ComponentKind::ViewModel => "SavedStateHandle handle = new SavedStateHandle();",
        _ => "Intent intent = Mockito.mock(Intent.class);",
    };
    let mut output = String::new();
    let _ = writeln!(output, "    @Test");
    let _ = writeln!(output, "    public void canCreateLenientMockitoDouble() {{");
    let _ = writeln!(
        output,
        "        {name} instance = Mockito.mock({name}.class, Mockito.withSettings().lenient());"
    );
    if component.kind.is_lifecycle() {
        let _ = writeln!(
            output,
            "        Mockito.when(context.getApplicationContext()).thenReturn(context);"
        );
    }
    let _ = writeln!(output, "        {collaborator}");
    let _ = writeln!(output, "        Assert.assertNotNull(instance);");
    let _ = writeln!(output, "    }}");
    output
}

/// Render the complete test class source for a component.
pub fn render_test_class(component: &Component) -> String {
    let mut output = String::new();
    if !component.package.is_empty() {
        let _ = writeln!(output, "package {};", component.package);
        let _ = writeln!(output);
    }
    for import in generate_imports(component) {
        let _ = writeln!(output, "import {import};");
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "@RunWith(MockitoJUnitRunner.class)");
    let _ = writeln!(output, "public class {} {{", component.test_class_name());
    output.push_str(mock_fields(component.kind));
    let _ = writeln!(output);
    output.push_str(&resolution_tests(component));
    let _ = writeln!(output);
    output.push_str(&mock_construction_test(component));
    let _ = writeln!(output, "}}");
    output
}
