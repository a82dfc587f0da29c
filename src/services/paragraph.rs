/// 段落格式化
///
/// 统一换行符，去掉每行首尾空白和空行，再用 `line_break` 连接
pub fn format_paragraphs(text: &str, line_break: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(line_break)
}
