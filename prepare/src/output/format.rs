/// представить строки в виде элементов массива на Rust: "a", "b", "c"
pub fn format_str_vec<I, S>(input: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = String::new();

    for (i, e) in input.into_iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }

        output.push_str(format!("{:?}", e.as_ref()).as_str());
    }

    output
}
