//! Python renderer: emits a runnable httpx-based sample program.

use std::fmt::Write;

use crate::model::HttpMethod;

use super::{ParamSpec, RenderContext};

const BASE_URL: &str = "https://api.jquants.com/v2";

pub(super) fn render(ctx: &RenderContext) -> String {
    let endpoint = ctx.endpoint;
    let mut out = String::new();

    writeln!(
        out,
        "\"\"\"Sample client for {} ({}).",
        endpoint.name_ja, endpoint.name_en
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(out, "{}", endpoint.description).unwrap();
    writeln!(out, "Endpoint: {} {}", endpoint.method, endpoint.path).unwrap();
    writeln!(out, "\"\"\"").unwrap();
    writeln!(out).unwrap();

    if uses_environment(ctx) {
        writeln!(out, "import os").unwrap();
        writeln!(out).unwrap();
    }
    writeln!(out, "import httpx").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "BASE_URL = \"{}\"", BASE_URL).unwrap();
    writeln!(out).unwrap();
    writeln!(out).unwrap();

    let arguments = function_arguments(ctx);
    writeln!(out, "def {}({}):", ctx.function_name, arguments.join(", ")).unwrap();
    write_docstring(&mut out, ctx);

    let blocks = function_body(ctx);
    out.push_str(&blocks.join("\n\n"));
    out.push('\n');

    writeln!(out).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "if __name__ == \"__main__\":").unwrap();
    if ctx.has_sensitive_params {
        let env_vars: Vec<&str> = ctx
            .required_params
            .iter()
            .filter_map(|p| p.env_var_name.as_deref())
            .collect();
        writeln!(
            out,
            "    # Requires environment variables: {}",
            env_vars.join(", ")
        )
        .unwrap();
    }
    writeln!(
        out,
        "    data = {}({})",
        ctx.function_name,
        example_arguments(ctx).join(", ")
    )
    .unwrap();
    writeln!(out, "    print(data)").unwrap();

    out
}

fn uses_environment(ctx: &RenderContext) -> bool {
    ctx.endpoint.auth_required
        || ctx
            .required_params
            .iter()
            .chain(&ctx.optional_params)
            .any(|p| p.is_sensitive || p.is_api_key)
}

/// Function arguments: non-sensitive required first, then non-sensitive
/// optional with a None default. Credentials never appear here.
fn function_arguments(ctx: &RenderContext) -> Vec<String> {
    let mut arguments = Vec::new();
    for param in ctx.required_params.iter().filter(|p| !p.is_sensitive) {
        arguments.push(param.name.clone());
    }
    for param in ctx.optional_params.iter().filter(|p| !p.is_sensitive) {
        arguments.push(format!("{}=None", param.name));
    }
    arguments
}

fn write_docstring(out: &mut String, ctx: &RenderContext) {
    let signature = format!("{} {}", ctx.endpoint.method, ctx.endpoint.path);
    let documented: Vec<&ParamSpec> = ctx
        .required_params
        .iter()
        .chain(&ctx.optional_params)
        .filter(|p| !p.is_sensitive)
        .collect();

    if documented.is_empty() {
        writeln!(out, "    \"\"\"{}\"\"\"", signature).unwrap();
        return;
    }

    writeln!(out, "    \"\"\"{}", signature).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "    Args:").unwrap();
    for param in documented {
        let suffix = if param.required { "" } else { " (optional)" };
        writeln!(out, "        {}: {}{}", param.name, param.description, suffix).unwrap();
    }
    writeln!(out, "    \"\"\"").unwrap();
}

fn function_body(ctx: &RenderContext) -> Vec<String> {
    let mut blocks = Vec::new();

    let credential_lines = credential_bindings(ctx);
    if !credential_lines.is_empty() {
        blocks.push(credential_lines.join("\n"));
    }

    let need_headers = ctx.endpoint.auth_required || !ctx.header_params.is_empty();
    if need_headers {
        let mut lines = vec!["    headers = {}".to_string()];
        if ctx.endpoint.auth_required {
            lines.push("    headers[\"x-api-key\"] = os.environ[\"JQUANTS_API_KEY\"]".to_string());
        }
        lines.extend(dict_assignments("headers", &ctx.header_params));
        blocks.push(lines.join("\n"));
    }

    // the pagination key travels as a query parameter, so the dict must
    // exist even when no query parameter is declared
    let need_params = !ctx.query_params.is_empty() || ctx.has_pagination;
    if need_params {
        let mut lines = vec!["    params = {}".to_string()];
        lines.extend(dict_assignments("params", &ctx.query_params));
        blocks.push(lines.join("\n"));
    }

    if !ctx.body_params.is_empty() {
        let mut lines = vec!["    body = {}".to_string()];
        lines.extend(dict_assignments("body", &ctx.body_params));
        blocks.push(lines.join("\n"));
    }

    let call = request_call(ctx, need_params, need_headers);
    if ctx.has_pagination {
        let extend = if ctx.response_data_key.is_empty() {
            "payload.get(\"data\", [])".to_string()
        } else {
            format!("payload[\"{}\"]", ctx.response_data_key)
        };
        blocks.push(
            [
                "    results = []".to_string(),
                "    pagination_key = None".to_string(),
                "    while True:".to_string(),
                "        if pagination_key is not None:".to_string(),
                "            params[\"pagination_key\"] = pagination_key".to_string(),
                format!("        response = {}", call),
                "        response.raise_for_status()".to_string(),
                "        payload = response.json()".to_string(),
                format!("        results.extend({})", extend),
                "        pagination_key = payload.get(\"pagination_key\")".to_string(),
                "        if not pagination_key:".to_string(),
                "            break".to_string(),
                "    return results".to_string(),
            ]
            .join("\n"),
        );
    } else {
        let result = if ctx.response_data_key.is_empty() {
            "payload".to_string()
        } else {
            format!("payload[\"{}\"]", ctx.response_data_key)
        };
        blocks.push(
            [
                format!("    response = {}", call),
                "    response.raise_for_status()".to_string(),
                "    payload = response.json()".to_string(),
                format!("    return {}", result),
            ]
            .join("\n"),
        );
    }

    blocks
}

/// Environment bindings for sensitive parameters: strict lookup for required
/// credentials, a tolerant get for optional ones.
fn credential_bindings(ctx: &RenderContext) -> Vec<String> {
    let mut lines = Vec::new();
    for param in ctx.required_params.iter().filter(|p| p.is_sensitive) {
        if let Some(env_var) = &param.env_var_name {
            lines.push(format!("    {} = os.environ[\"{}\"]", param.name, env_var));
        }
    }
    for param in ctx.optional_params.iter().filter(|p| p.is_sensitive) {
        if let Some(env_var) = &param.env_var_name {
            lines.push(format!(
                "    {} = os.environ.get(\"{}\")",
                param.name, env_var
            ));
        }
    }
    lines
}

/// Assignments into a request dict, keyed by wire name, valued by the local
/// identifier. Optional parameters are guarded.
fn dict_assignments(var: &str, params: &[ParamSpec]) -> Vec<String> {
    let mut lines = Vec::new();
    for param in params {
        if param.required {
            lines.push(format!(
                "    {}[\"{}\"] = {}",
                var, param.original_name, param.name
            ));
        } else {
            lines.push(format!("    if {} is not None:", param.name));
            lines.push(format!(
                "        {}[\"{}\"] = {}",
                var, param.original_name, param.name
            ));
        }
    }
    lines
}

fn request_call(ctx: &RenderContext, need_params: bool, need_headers: bool) -> String {
    let method = match ctx.endpoint.method {
        HttpMethod::Get => "get",
        HttpMethod::Post => "post",
        HttpMethod::Put => "put",
        HttpMethod::Delete => "delete",
    };

    let mut call = format!("httpx.{}(f\"{{BASE_URL}}{}\"", method, ctx.endpoint.path);
    if need_params {
        call.push_str(", params=params");
    }
    if !ctx.body_params.is_empty() {
        call.push_str(", json=body");
    }
    if need_headers {
        call.push_str(", headers=headers");
    }
    call.push(')');
    call
}

/// Arguments for the example invocation: example literals for plain
/// parameters, the environment-sourced key for api-key parameters.
fn example_arguments(ctx: &RenderContext) -> Vec<String> {
    ctx.non_sensitive_required_params
        .iter()
        .map(|param| {
            if param.is_api_key {
                format!("{}=os.environ[\"JQUANTS_API_KEY\"]", param.name)
            } else {
                format!("{}={}", param.name, param.example_value)
            }
        })
        .collect()
}
