//! Built-in reflectometry tools and workflows
//!
//! The fixed catalog the `refltools` binary serves. Tool order here is display order.

use super::definition::{DataCategory, ToolEntry, WorkflowEntry};

/// Number of built-in tools.
pub const BUILTIN_TOOL_COUNT: usize = 5;

/// Number of built-in workflows.
pub const BUILTIN_WORKFLOW_COUNT: usize = 3;

/// Returns all built-in tool entries.
pub fn builtin_tools() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "partial_data_assessor",
            "Partial Data Assessor",
            "analyzer_tools.partial_data_assessor",
            "Assess quality of partial reflectometry data by analyzing overlap regions between data parts. \
             Calculates chi-squared metrics and generates visualization reports.",
        )
        .with_usage("python analyzer_tools/partial_data_assessor.py <set_id>")
        .with_example("python analyzer_tools/partial_data_assessor.py 218281")
        .with_example("python analyzer_tools/partial_data_assessor.py 218328")
        .with_category(DataCategory::Partial),
        ToolEntry::new(
            "run_fit",
            "Reflectivity Fit Runner",
            "analyzer_tools.run_fit",
            "Run reflectivity fits on combined data using specified models. \
             Performs least-squares fitting and generates fit reports with uncertainty analysis.",
        )
        .with_usage("python analyzer_tools/run_fit.py <data_id> <model_name>")
        .with_example("python analyzer_tools/run_fit.py 218281 cu_thf")
        .with_example("python analyzer_tools/run_fit.py 218328 cu_thf_temp")
        .with_category(DataCategory::Combined),
        ToolEntry::new(
            "result_assessor",
            "Fit Result Assessor",
            "analyzer_tools.result_assessor",
            "Assess quality of fitting results by analyzing chi-squared values, parameter uncertainties, \
             and generating comparison plots.",
        )
        .with_usage("python analyzer_tools/result_assessor.py <data_id> <model_name>")
        .with_example("python analyzer_tools/result_assessor.py 218281 cu_thf")
        .with_example("python analyzer_tools/result_assessor.py 218328 cu_thf_temp")
        .with_category(DataCategory::Combined),
        ToolEntry::new(
            "create_model_script",
            "Model Script Creator",
            "analyzer_tools.create_model_script",
            "Generate fitting scripts by combining model definitions with fitting commands. \
             Useful for batch processing and reproducible analysis.",
        )
        .with_usage(
            "python analyzer_tools/create_model_script.py <model_name> <data_file> \
             [--model_dir DIR] [--output_dir DIR]",
        )
        .with_example("python analyzer_tools/create_model_script.py cu_thf data.txt")
        .with_example("python analyzer_tools/create_model_script.py cu_thf data.txt --output_dir custom_output")
        .with_category(DataCategory::Combined),
        ToolEntry::new(
            "create_temporary_model",
            "Temporary Model Creator",
            "analyzer_tools.create_temporary_model",
            "Create temporary models with adjusted parameter ranges for sensitivity analysis \
             and parameter exploration.",
        )
        .with_usage(
            "python analyzer_tools/create_temporary_model.py <base_model> <new_model> \
             --adjust <param> <min>,<max>",
        )
        .with_example(
            "python analyzer_tools/create_temporary_model.py cu_thf cu_thf_temp --adjust Cu thickness 500,800",
        )
        .with_example(
            "python analyzer_tools/create_temporary_model.py cu_thf cu_thf_wide --adjust Cu thickness 300,1000",
        )
        .with_category(DataCategory::Both),
    ]
}

/// Returns all built-in workflow entries.
pub fn builtin_workflows() -> Vec<WorkflowEntry> {
    vec![
        WorkflowEntry::new(
            "partial_data_quality",
            "Partial Data Quality Assessment",
            "Assess the quality of partial reflectometry data before combining",
        )
        .with_step("1. Use partial_data_assessor to check overlap quality")
        .with_step("2. Review chi-squared metrics (< 2.0 is typically good)")
        .with_step("3. Examine overlap plots for systematic deviations")
        .with_step("4. Identify problematic datasets for further investigation")
        .with_tool("partial_data_assessor"),
        WorkflowEntry::new(
            "standard_fitting",
            "Standard Reflectivity Fitting",
            "Complete workflow for fitting reflectivity data",
        )
        .with_step("1. Use run_fit to perform initial fitting")
        .with_step("2. Use result_assessor to evaluate fit quality")
        .with_step("3. If poor fit, use create_temporary_model to adjust parameters")
        .with_step("4. Re-run fitting with adjusted model")
        .with_step("5. Generate final reports")
        .with_tool("run_fit")
        .with_tool("result_assessor")
        .with_tool("create_temporary_model"),
        WorkflowEntry::new(
            "parameter_exploration",
            "Parameter Sensitivity Analysis",
            "Explore parameter sensitivity and uncertainty",
        )
        .with_step("1. Start with standard fitting workflow")
        .with_step("2. Use create_temporary_model to create variants with different parameter ranges")
        .with_step("3. Run fits on multiple parameter sets")
        .with_step("4. Use result_assessor to compare results")
        .with_step("5. Identify sensitive parameters and optimal ranges")
        .with_tool("run_fit")
        .with_tool("result_assessor")
        .with_tool("create_temporary_model"),
    ]
}
