use uitree_markup::ParseError;

/// Render a parse error the way compilers do: message, location, the
/// offending source line and a caret under the failing character.
pub fn render_error(error: &ParseError, filename: &str, source: &str) -> String {
    let (line_no, col) = error.line_col(source);
    let line = source.lines().nth(line_no - 1).unwrap_or("");

    let mut underline = String::with_capacity(col);
    for c in line.chars().take(col - 1) {
        match c {
            '\t' => underline.push('\t'),
            _ => underline.push(' '),
        }
    }
    underline.push('^');

    let padding = " ".repeat(line_no.to_string().len());
    format!(
        "error: {}\n\
         {padding}--> {}:{}:{}\n\
         {padding} |\n\
         {} | {}\n\
         {padding} | {}",
        error.message, filename, line_no, col, line_no, line, underline,
    )
}
