//! Catalog overview and detail reports
//!
//! Pure consumers of the registry's query API. The data-organization paths
//! come from configuration when it loads and from fixed defaults otherwise.

use crate::config::{Config, PathsConfig};
use crate::error::Result;
use crate::registry::{Registry, ToolEntry, ValidationIssue, WorkflowEntry};

const WIDE_RULE: usize = 70;
const SECTION_RULE: usize = 40;

/// Directory conventions shown in the overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataOrganization {
    pub partial_data_dir: String,
    pub combined_data_dir: String,
    pub reports_dir: String,
    pub combined_data_template: String,
    pub models_dir: String,
}

impl Default for DataOrganization {
    fn default() -> Self {
        Self::from(&PathsConfig::default())
    }
}

impl From<&PathsConfig> for DataOrganization {
    fn from(paths: &PathsConfig) -> Self {
        Self {
            partial_data_dir: paths.partial_data_dir.clone(),
            combined_data_dir: paths.combined_data_dir.clone(),
            reports_dir: paths.reports_dir.clone(),
            combined_data_template: paths.combined_data_template.clone(),
            models_dir: paths.models_dir.clone(),
        }
    }
}

impl DataOrganization {
    /// Combined data file name for a set id
    pub fn combined_data_file(&self, set_id: &str) -> String {
        self.combined_data_template.replace("{set_id}", set_id)
    }

    /// Use the loaded configuration, or the fixed defaults when it could not be loaded
    pub fn resolve(config: &eyre::Result<Config>) -> Self {
        match config {
            Ok(config) => Self::from(&config.paths),
            Err(e) => {
                log::warn!("Configuration unavailable, using default data organization: {:#}", e);
                Self::default()
            }
        }
    }
}

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

fn section(output: &mut String, title: &str) {
    output.push_str(&format!("\n{}:\n", title));
    output.push_str(&format!("{}\n", rule('-', SECTION_RULE)));
}

/// Full overview of tools, workflows, data layout and quick-start commands
pub fn render_overview(registry: &Registry, data_org: &DataOrganization) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", rule('=', WIDE_RULE)));
    output.push_str("NEUTRON REFLECTOMETRY DATA ANALYSIS TOOLS\n");
    output.push_str(&format!("{}\n", rule('=', WIDE_RULE)));

    section(&mut output, "AVAILABLE ANALYSIS TOOLS");
    for tool in registry.all_tools() {
        output.push_str(&format!("\n* {}\n", tool.name));
        output.push_str(&format!("   {}\n", tool.description));
        output.push_str(&format!("   Data type: {}\n", tool.data_category));
        output.push_str(&format!("   Usage: {}\n", tool.usage));
        if let Some(example) = tool.primary_example() {
            output.push_str(&format!("   Example: {}\n", example));
        }
    }

    section(&mut output, "ANALYSIS WORKFLOWS");
    for workflow in registry.all_workflows() {
        output.push_str(&format!("\n> {}\n", workflow.name));
        output.push_str(&format!("   {}\n", workflow.description));
        output.push_str(&format!("   Tools used: {}\n", workflow.tool_refs.join(", ")));
    }

    section(&mut output, "DATA ORGANIZATION");
    output.push_str(&format!(
        "   - Partial data: {}/ (REFL_<set_ID>_<part_ID>_<run_ID>_partial.txt)\n",
        data_org.partial_data_dir
    ));
    output.push_str(&format!(
        "   - Combined data: {}/ ({})\n",
        data_org.combined_data_dir, data_org.combined_data_template
    ));
    output.push_str(&format!(
        "   - Models: {}/ (Python files with reflectivity models)\n",
        data_org.models_dir
    ));
    output.push_str(&format!(
        "   - Reports: {}/ (Generated analysis reports and plots)\n",
        data_org.reports_dir
    ));

    section(&mut output, "QUICK START");
    let quick = [
        ("For partial data quality", "partial_data_assessor"),
        ("For reflectivity fitting", "run_fit"),
        ("For result assessment", "result_assessor"),
    ];
    let mut n = 0;
    for (label, key) in quick {
        if let Some(example) = registry.tool(key).and_then(|t| t.primary_example()) {
            n += 1;
            output.push_str(&format!("   {}. {}: {}\n", n, label, example));
        }
    }

    output.push_str(&format!("\n{}\n", rule('=', WIDE_RULE)));
    output
}

/// One-line-per-tool listing
pub fn render_tool_list<'a>(tools: impl IntoIterator<Item = &'a ToolEntry>) -> String {
    let mut output = String::new();
    for tool in tools {
        output.push_str(&format!(
            "{:<24} {:<9} {}\n",
            tool.key,
            tool.data_category.as_str(),
            tool.name
        ));
    }
    output
}

/// Everything the catalog knows about one tool
pub fn render_tool_detail(registry: &Registry, tool: &ToolEntry) -> String {
    let mut output = String::new();
    output.push_str(&format!("{} ({})\n", tool.name, tool.key));
    output.push_str(&format!("   {}\n", tool.description));
    output.push_str(&format!("   Module: {}\n", tool.module_ref));
    output.push_str(&format!("   Data type: {}\n", tool.data_category));
    output.push_str(&format!("   Usage: {}\n", tool.usage));
    if !tool.examples.is_empty() {
        output.push_str("   Examples:\n");
        for example in &tool.examples {
            output.push_str(&format!("     {}\n", example));
        }
    }
    let workflows: Vec<_> = registry
        .workflows_using(&tool.key)
        .into_iter()
        .map(|w| w.key.as_str())
        .collect();
    if !workflows.is_empty() {
        output.push_str(&format!("   Workflows: {}\n", workflows.join(", ")));
    }
    output
}

/// A workflow with numbered steps and the tools it draws on
pub fn render_workflow_detail(registry: &Registry, workflow: &WorkflowEntry) -> String {
    let mut output = String::new();
    output.push_str(&format!("{} ({})\n", workflow.name, workflow.key));
    output.push_str(&format!("   {}\n", workflow.description));
    output.push_str("   Steps:\n");
    for step in &workflow.steps {
        output.push_str(&format!("     {}\n", step));
    }
    output.push_str("   Tools:\n");
    for tool_key in &workflow.tool_refs {
        match registry.tool(tool_key) {
            Some(tool) => output.push_str(&format!("     {} - {}\n", tool.key, tool.name)),
            None => output.push_str(&format!("     {} - (not in catalog)\n", tool_key)),
        }
    }
    output
}

/// Every workflow in catalog order
pub fn render_workflows(registry: &Registry) -> String {
    registry
        .all_workflows()
        .iter()
        .map(|w| render_workflow_detail(registry, w))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable result of reference validation
pub fn render_validation(issues: &[ValidationIssue]) -> String {
    if issues.is_empty() {
        return "OK: every workflow references known tools\n".to_string();
    }
    let mut output = format!("{} dangling reference(s):\n", issues.len());
    for issue in issues {
        output.push_str(&format!("   - {}\n", issue));
    }
    output
}

/// Serialize tools for machine consumption
pub fn tools_json<'a>(tools: impl IntoIterator<Item = &'a ToolEntry>) -> Result<String> {
    let tools: Vec<_> = tools.into_iter().collect();
    Ok(serde_json::to_string_pretty(&tools)?)
}

/// Serialize workflows for machine consumption
pub fn workflows_json<'a>(workflows: impl IntoIterator<Item = &'a WorkflowEntry>) -> Result<String> {
    let workflows: Vec<_> = workflows.into_iter().collect();
    Ok(serde_json::to_string_pretty(&workflows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DataCategory;

    fn registry() -> Registry {
        Registry::builtin().unwrap()
    }

    #[test]
    fn test_overview_sections() {
        let output = render_overview(&registry(), &DataOrganization::default());
        assert!(output.contains("NEUTRON REFLECTOMETRY DATA ANALYSIS TOOLS"));
        assert!(output.contains("AVAILABLE ANALYSIS TOOLS"));
        assert!(output.contains("ANALYSIS WORKFLOWS"));
        assert!(output.contains("DATA ORGANIZATION"));
        assert!(output.contains("QUICK START"));
    }

    #[test]
    fn test_overview_lists_every_tool_and_workflow() {
        let registry = registry();
        let output = render_overview(&registry, &DataOrganization::default());
        for tool in registry.all_tools() {
            assert!(output.contains(&tool.name), "missing {}", tool.name);
            assert!(output.contains(&tool.usage));
        }
        for workflow in registry.all_workflows() {
            assert!(output.contains(&workflow.name));
        }
        assert!(output.contains("Tools used: run_fit, result_assessor, create_temporary_model"));
    }

    #[test]
    fn test_overview_tool_order_matches_catalog() {
        let registry = registry();
        let output = render_overview(&registry, &DataOrganization::default());
        let positions: Vec<_> = registry
            .all_tools()
            .iter()
            .map(|t| output.find(&format!("* {}", t.name)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_overview_uses_configured_paths() {
        let data_org = DataOrganization {
            partial_data_dir: "test_partial".to_string(),
            combined_data_dir: "test_combined".to_string(),
            reports_dir: "test_reports".to_string(),
            combined_data_template: "TEST_{set_id}_data.txt".to_string(),
            models_dir: "test_models".to_string(),
        };
        let output = render_overview(&registry(), &data_org);
        assert!(output.contains("test_combined/"));
        assert!(output.contains("test_partial/"));
        assert!(output.contains("TEST_{set_id}_data.txt"));
        assert!(output.contains("test_models/"));
        assert!(output.contains("test_reports/"));
    }

    #[test]
    fn test_overview_quick_start() {
        let output = render_overview(&registry(), &DataOrganization::default());
        assert!(output.contains("1. For partial data quality: python analyzer_tools/partial_data_assessor.py 218281"));
        assert!(output.contains("2. For reflectivity fitting: python analyzer_tools/run_fit.py 218281 cu_thf"));
        assert!(output.contains("3. For result assessment: python analyzer_tools/result_assessor.py 218281 cu_thf"));
    }

    #[test]
    fn test_resolve_falls_back_on_config_error() {
        let failed: eyre::Result<Config> = Err(eyre::eyre!("config unavailable"));
        let data_org = DataOrganization::resolve(&failed);
        assert_eq!(data_org, DataOrganization::default());

        let output = render_overview(&registry(), &data_org);
        assert!(output.contains("data/combined"));
        assert!(output.contains("data/partial"));
    }

    #[test]
    fn test_default_matches_paths_config_defaults() {
        let data_org = DataOrganization::default();
        assert_eq!(data_org, DataOrganization::from(&PathsConfig::default()));
        assert_eq!(data_org.combined_data_dir, "data/combined");
        assert_eq!(data_org.models_dir, "models");
    }

    #[test]
    fn test_combined_data_file() {
        let data_org = DataOrganization::default();
        assert_eq!(data_org.combined_data_file("218281"), "REFL_218281_combined_data_auto.txt");

        let custom = DataOrganization {
            combined_data_template: "TEST_{set_id}_data.txt".to_string(),
            ..DataOrganization::default()
        };
        assert_eq!(custom.combined_data_file("42"), "TEST_42_data.txt");
    }

    #[test]
    fn test_resolve_uses_loaded_config() {
        let mut config = Config::default();
        config.paths.models_dir = "my_models".to_string();
        let data_org = DataOrganization::resolve(&Ok(config));
        assert_eq!(data_org.models_dir, "my_models");
        assert_eq!(data_org.reports_dir, "reports");
    }

    #[test]
    fn test_tool_list_filtered() {
        let registry = registry();
        let output = render_tool_list(registry.tools_by_category(DataCategory::Partial));
        assert!(output.contains("partial_data_assessor"));
        assert!(output.contains("create_temporary_model"));
        assert!(!output.contains("run_fit"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_tool_detail() {
        let registry = registry();
        let tool = registry.tool("create_temporary_model").unwrap();
        let output = render_tool_detail(&registry, tool);
        assert!(output.contains("Temporary Model Creator (create_temporary_model)"));
        assert!(output.contains("Module: analyzer_tools.create_temporary_model"));
        assert!(output.contains("--adjust Cu thickness 300,1000"));
        assert!(output.contains("Workflows: standard_fitting, parameter_exploration"));
    }

    #[test]
    fn test_workflow_detail() {
        let registry = registry();
        let workflow = registry.workflow("standard_fitting").unwrap();
        let output = render_workflow_detail(&registry, workflow);
        assert!(output.contains("Standard Reflectivity Fitting (standard_fitting)"));
        assert!(output.contains("5. Generate final reports"));
        assert!(output.contains("run_fit - Reflectivity Fit Runner"));
    }

    #[test]
    fn test_workflow_detail_marks_missing_tool() {
        let workflow = WorkflowEntry::new("w", "W", "").with_tool("ghost");
        let registry = Registry::new(vec![], vec![workflow.clone()]).unwrap();
        let output = render_workflow_detail(&registry, &workflow);
        assert!(output.contains("ghost - (not in catalog)"));
    }

    #[test]
    fn test_render_workflows_includes_all() {
        let output = render_workflows(&registry());
        assert!(output.contains("(partial_data_quality)"));
        assert!(output.contains("(standard_fitting)"));
        assert!(output.contains("(parameter_exploration)"));
    }

    #[test]
    fn test_validation_report() {
        assert!(render_validation(&[]).starts_with("OK"));

        let issues = vec![ValidationIssue {
            workflow: "w1".to_string(),
            tool: "z".to_string(),
        }];
        let output = render_validation(&issues);
        assert!(output.starts_with("1 dangling reference(s)"));
        assert!(output.contains("workflow 'w1' references unknown tool 'z'"));
    }

    #[test]
    fn test_tools_json() {
        let registry = registry();
        let json = tools_json(registry.all_tools()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 5);
        assert_eq!(parsed[0]["key"], "partial_data_assessor");
        assert_eq!(parsed[0]["data_category"], "partial");
    }

    #[test]
    fn test_workflows_json() {
        let registry = registry();
        let json = workflows_json(registry.all_workflows()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[1]["tool_refs"][0], "run_fit");
    }
}
