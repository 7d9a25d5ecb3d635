//! 上游文件名 -> 规则名
//! 过滤扩展名、剥离后缀、大小写转换、去除排除项

use std::collections::HashSet;

use super::model::{RuleDescriptor, RuleName, SourceProfile, to_camel_case};

/// 从文件名中取出规则名主体；扩展名不匹配时返回 None
pub fn rule_stem<'a>(file_name: &'a str, profile: &SourceProfile) -> Option<&'a str> {
    let stem = file_name.strip_suffix(profile.extension)?;
    let stem = match profile.name_suffix {
        Some(suffix) => stem.strip_suffix(suffix).unwrap_or(stem),
        None => stem,
    };
    if stem.is_empty() { None } else { Some(stem) }
}

/// 规范化上游目录条目
/// 返回值按上游顺序排列且已去重，调用方应按集合使用
pub fn normalize(
    descriptors: &[RuleDescriptor],
    profile: &SourceProfile,
    exclusions: Option<&[String]>,
) -> Vec<RuleName> {
    // 排除列表为 dash-case 配置，统一转为 camelCase 再比较
    let excluded: HashSet<String> = exclusions
        .unwrap_or_default()
        .iter()
        .map(|name| to_camel_case(name))
        .collect();

    let mut seen = HashSet::new();
    let mut rules = Vec::new();

    for descriptor in descriptors {
        let Some(stem) = rule_stem(&descriptor.name, profile) else {
            continue;
        };
        let camel = profile.case.apply(stem);
        if excluded.contains(&camel) {
            continue;
        }
        if seen.insert(camel.clone()) {
            rules.push(RuleName::new(camel));
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::model::{CaseTransform, LintTool};

    fn descriptors(names: &[&str]) -> Vec<RuleDescriptor> {
        names.iter().map(|n| RuleDescriptor::from_name(*n)).collect()
    }

    fn names(rules: &[RuleName]) -> Vec<&str> {
        rules.iter().map(RuleName::as_str).collect()
    }

    #[test]
    fn test_extension_filtering() {
        let profile = SourceProfile {
            extension: ".js",
            name_suffix: None,
            case: CaseTransform::Identity,
        };
        let rules = normalize(&descriptors(&["index.js", "rule.js", "readme.md"]), &profile, None);
        assert_eq!(names(&rules), vec!["index", "rule"]);
    }

    #[test]
    fn test_eslint_profile_camelizes() {
        let profile = LintTool::EsLint.profile();
        let rules = normalize(
            &descriptors(&["no-extra-semi.js", "semi.js", "utils", "no-extra-semi.js.map"]),
            &profile,
            None,
        );
        assert_eq!(names(&rules), vec!["noExtraSemi", "semi"]);
    }

    #[test]
    fn test_tslint_profile_strips_rule_suffix() {
        let profile = LintTool::TsLint.profile();
        let rules = normalize(
            &descriptors(&["noConsoleRule.ts", "alignRule.ts", "index.ts", "completed-docs"]),
            &profile,
            None,
        );
        assert_eq!(names(&rules), vec!["noConsole", "align", "index"]);
    }

    #[test]
    fn test_exclusions_are_camelized() {
        let profile = LintTool::TsLint.profile();
        let exclusions = vec!["no-unused-variable".to_string(), "foo".to_string()];
        let rules = normalize(
            &descriptors(&["noUnusedVariableRule.ts", "foo.ts", "bar.ts"]),
            &profile,
            Some(exclusions.as_slice()),
        );
        assert_eq!(names(&rules), vec!["bar"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let profile = LintTool::EsLint.profile();
        let rules = normalize(&descriptors(&["semi.js", "semi.js"]), &profile, None);
        assert_eq!(names(&rules), vec!["semi"]);
    }

    #[test]
    fn test_bare_extension_is_skipped() {
        let profile = LintTool::TsLint.profile();
        assert_eq!(rule_stem(".ts", &profile), None);
        assert_eq!(rule_stem("Rule.ts", &profile), None);
        assert_eq!(rule_stem("quotemarkRule.ts", &profile), Some("quotemark"));
    }
}
