//! 比较报告及其文本渲染

use std::fmt;

use super::model::{LintTool, RuleName};

/// 单次比较的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub tool: LintTool,
    /// 上游有、内部映射表没有的规则
    pub missing: Vec<RuleName>,
    /// 内部有、上游已不存在的规则；None 表示该方向未计算
    pub deprecated: Option<Vec<RuleName>>,
}

impl ComparisonReport {
    pub fn new(tool: LintTool, missing: Vec<RuleName>, deprecated: Option<Vec<RuleName>>) -> Self {
        Self {
            tool,
            missing,
            deprecated,
        }
    }

    pub fn is_in_sync(&self) -> bool {
        self.missing.is_empty() && self.deprecated.as_ref().is_none_or(|d| d.is_empty())
    }

    /// 渲染为多行文本（不含末尾空行）
    pub fn render(&self) -> String {
        let tool = self.tool.display_name();
        let mut buffer: Vec<String> = Vec::new();

        if !self.missing.is_empty() {
            buffer.push(format!("Missing {} rules ({}):", tool, self.tool.docs_url()));
            push_bullets(&mut buffer, &self.missing);
        }

        if let Some(deprecated) = self.deprecated.as_ref().filter(|d| !d.is_empty()) {
            buffer.push(format!("Deprecated {} rules:", tool));
            push_bullets(&mut buffer, deprecated);
        }

        if buffer.is_empty() {
            buffer.push(format!("{} rules are in sync!", tool));
        }

        buffer.join("\n")
    }
}

fn push_bullets(buffer: &mut Vec<String>, rules: &[RuleName]) {
    buffer.extend(rules.iter().map(|rule| format!("- {}", rule.to_dash())));
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(names: &[&str]) -> Vec<RuleName> {
        names.iter().map(|n| RuleName::from(*n)).collect()
    }

    #[test]
    fn test_eslint_report_both_sections() {
        let report = ComparisonReport::new(
            LintTool::EsLint,
            rules(&["noExtraSemi", "preferConst"]),
            Some(rules(&["noSpacedFunc"])),
        );
        assert_eq!(
            report.render(),
            "Missing ESLint rules (http://eslint.org/docs/rules):\n\
             - no-extra-semi\n\
             - prefer-const\n\
             Deprecated ESLint rules:\n\
             - no-spaced-func"
        );
        assert!(!report.is_in_sync());
    }

    #[test]
    fn test_eslint_report_only_deprecated() {
        let report = ComparisonReport::new(LintTool::EsLint, Vec::new(), Some(rules(&["validJsdoc"])));
        assert_eq!(report.render(), "Deprecated ESLint rules:\n- valid-jsdoc");
    }

    #[test]
    fn test_empty_report_is_single_line() {
        let report = ComparisonReport::new(LintTool::EsLint, Vec::new(), Some(Vec::new()));
        assert_eq!(report.to_string(), "ESLint rules are in sync!");
        assert!(report.is_in_sync());
    }

    #[test]
    fn test_tslint_report() {
        let missing = ComparisonReport::new(LintTool::TsLint, rules(&["noConsole"]), None);
        assert_eq!(
            missing.render(),
            "Missing TSLint rules (http://palantir.github.io/tslint/rules):\n- no-console"
        );

        let in_sync = ComparisonReport::new(LintTool::TsLint, Vec::new(), None);
        assert_eq!(in_sync.render(), "TSLint rules are in sync!");
    }
}
