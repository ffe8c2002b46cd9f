//! CAP 示例文档
//!
//! 生成一份最小的 CAP 1.2 告警文档，供 `--gen-cap` 与测试使用。
//! 仿真核心不解析 CAP——载荷对它只是字节。

/// 生成一份示例 CAP XML 告警文档。
pub fn sample_alert(identifier: &str) -> String {
    format!(
        r#"<alert xmlns="urn:oasis:names:tc:emergency:cap:1.2">
  <identifier>{identifier}</identifier>
  <sender>emma@demo.org</sender>
  <sent>2024-06-01T12:00:00+00:00</sent>
  <status>Actual</status>
  <msgType>Alert</msgType>
  <scope>Public</scope>
  <info>
    <category>Safety</category>
    <event>Test Alert</event>
    <urgency>Immediate</urgency>
    <severity>Extreme</severity>
    <certainty>Observed</certainty>
    <headline>Test Alert</headline>
    <description>This is a test alert.</description>
  </info>
</alert>
"#
    )
}
