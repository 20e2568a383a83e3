//! Getting-started text for new users

use crate::registry::{DataCategory, Registry};

use super::overview::{DataOrganization, render_overview};

/// Greeting followed by the full overview
pub fn render_welcome(registry: &Registry, data_org: &DataOrganization) -> String {
    let mut output = String::new();
    output.push_str("Welcome to Neutron Reflectometry Data Analysis!\n");
    output.push_str("This repository provides tools for analyzing neutron reflectometry data.\n\n");
    output.push_str(&render_overview(registry, data_org));
    output
}

fn example_for<'a>(registry: &'a Registry, key: &'a str) -> &'a str {
    registry
        .tool(key)
        .and_then(|t| t.primary_example())
        .unwrap_or(key)
}

/// Step-by-step start for one data category; `Both` covers partial and combined
pub fn render_quick_start(
    registry: &Registry,
    data_org: &DataOrganization,
    category: DataCategory,
) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "QUICK START GUIDE - {} DATA\n",
        category.as_str().to_uppercase()
    ));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    if matches!(category, DataCategory::Partial | DataCategory::Both) {
        output.push_str("\nFor Partial Data Analysis:\n");
        output.push_str("   1. Assess data quality:\n");
        output.push_str(&format!("      {}\n", example_for(registry, "partial_data_assessor")));
        output.push_str(&format!(
            "   2. Check the generated report in {}/report_<set_id>.md\n",
            data_org.reports_dir
        ));
        output.push_str("   3. Look for chi-squared values < 2.0 (good overlap)\n");
    }

    if matches!(category, DataCategory::Combined | DataCategory::Both) {
        output.push_str("\nFor Combined Data Fitting:\n");
        output.push_str(&format!(
            "   1. Run a fit (reads {}/{}):\n",
            data_org.combined_data_dir,
            data_org.combined_data_file("<set_id>")
        ));
        output.push_str(&format!("      {}\n", example_for(registry, "run_fit")));
        output.push_str("   2. Assess the fit quality:\n");
        output.push_str(&format!("      {}\n", example_for(registry, "result_assessor")));
        output.push_str(&format!("   3. Check {}/ directory for results\n", data_org.reports_dir));
    }

    output.push_str("\nTips:\n");
    output.push_str("   - Use 'refltools tools' to see all tools\n");
    output.push_str("   - Use 'refltools workflows' to see analysis workflows\n");
    output.push_str("   - Use 'refltools data' to see which data sets are available\n");
    output.push_str(&format!("\n{}\n", "=".repeat(50)));
    output
}

/// Analysis goals and the tools that serve them
const CHOICES: &[(&str, &[&str])] = &[
    ("Check quality of partial data (before combining)", &["partial_data_assessor"]),
    ("Fit reflectivity data with a model", &["run_fit"]),
    ("Evaluate quality of existing fit results", &["result_assessor"]),
    (
        "Create or modify fitting models",
        &["create_model_script", "create_temporary_model"],
    ),
];

/// Map analysis goals to tools, with an example invocation for each
pub fn render_tool_chooser(registry: &Registry) -> String {
    let mut output = String::new();
    output.push_str("TOOL SELECTION HELPER\n");
    output.push_str(&format!("{}\n", "=".repeat(30)));
    output.push_str("What type of analysis do you want to perform?\n");

    for (i, (goal, keys)) in CHOICES.iter().enumerate() {
        let tools: Vec<_> = keys.iter().filter_map(|k| registry.tool(k)).collect();
        if tools.is_empty() {
            continue;
        }
        output.push_str(&format!("\n{}. {}\n", i + 1, goal));
        let names: Vec<_> = tools.iter().map(|t| t.key.as_str()).collect();
        output.push_str(&format!("   -> Use: {}\n", names.join(" or ")));
        if let Some(example) = tools.last().and_then(|t| t.primary_example()) {
            output.push_str(&format!("   -> Example: {}\n", example));
        }
    }

    output.push_str("\nFor complete workflows, run: refltools workflows\n");
    output.push_str(&format!("{}\n", "=".repeat(30)));
    output
}
