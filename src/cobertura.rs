/// Writer for Cobertura XML coverage reports.
///
/// Output structure:
///   <?xml version="1.0" encoding="UTF-8"?>
///   <!DOCTYPE coverage SYSTEM "http://cobertura.sourceforge.net/xml/coverage-03.dtd">
///   <coverage line-rate="..." branch-rate="0" version="..." timestamp="...">
///     <packages>
///       <package name="..." line-rate="..." branch-rate="0" complexity="0" line-count="..." line-hits="...">
///         <classes>
///           <class name="..." filename="..." line-rate="..." ...>
///             <methods>
///               <method name="..." signature="" line-rate="..." ...>
///                 <lines><line number="..." hits="..."/></lines>
///               </method>
///             </methods>
///             <lines><line number="..." hits="..."/></lines>
///           </class>
///         </classes>
///       </package>
///     </packages>
///   </coverage>
///
/// Indented with one tab per level. Branch coverage is not tracked, so
/// branch-rate and complexity are always 0.
use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;
use crate::model::*;

pub const DOCTYPE: &str =
    r#"coverage SYSTEM "http://cobertura.sourceforge.net/xml/coverage-03.dtd""#;

/// Write `coverage` as a complete Cobertura document, including the XML
/// declaration, DOCTYPE and a trailing newline.
pub fn write<W: Write>(coverage: &Coverage, sink: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(sink, b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))?;

    let mut root = BytesStart::new("coverage");
    root.push_attribute(("line-rate", fmt_rate(coverage.line_rate).as_str()));
    root.push_attribute(("branch-rate", "0"));
    root.push_attribute(("version", coverage.version.as_str()));
    root.push_attribute(("timestamp", coverage.timestamp.to_string().as_str()));
    writer.write_event(Event::Start(root))?;

    open(&mut writer, "packages")?;
    for package in &coverage.packages {
        write_package(&mut writer, package)?;
    }
    close(&mut writer, "packages")?;

    close(&mut writer, "coverage")?;
    writer.into_inner().write_all(b"\n")?;
    Ok(())
}

/// Render the document into a string.
pub fn to_string(coverage: &Coverage) -> Result<String> {
    let mut buf = Vec::new();
    write(coverage, &mut buf)?;
    // Every byte written above comes from `&str` values.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_package<W: Write>(writer: &mut Writer<W>, package: &PackageReport) -> Result<()> {
    let mut start = BytesStart::new("package");
    start.push_attribute(("name", package.name.as_str()));
    start.push_attribute(("line-rate", fmt_rate(package.line_rate).as_str()));
    start.push_attribute(("branch-rate", "0"));
    start.push_attribute(("complexity", "0"));
    start.push_attribute(("line-count", package.line_count.to_string().as_str()));
    start.push_attribute(("line-hits", package.line_hits.to_string().as_str()));
    writer.write_event(Event::Start(start))?;

    if package.classes.is_empty() {
        empty(writer, "classes")?;
    } else {
        open(writer, "classes")?;
        for class in &package.classes {
            write_class(writer, class)?;
        }
        close(writer, "classes")?;
    }

    close(writer, "package")
}

fn write_class<W: Write>(writer: &mut Writer<W>, class: &ClassReport) -> Result<()> {
    let mut start = BytesStart::new("class");
    start.push_attribute(("name", class.name.as_str()));
    start.push_attribute(("filename", class.filename.as_str()));
    start.push_attribute(("line-rate", fmt_rate(class.line_rate).as_str()));
    start.push_attribute(("branch-rate", "0"));
    start.push_attribute(("complexity", "0"));
    start.push_attribute(("line-count", class.line_count.to_string().as_str()));
    start.push_attribute(("line-hits", class.line_hits.to_string().as_str()));
    writer.write_event(Event::Start(start))?;

    open(writer, "methods")?;
    for method in &class.methods {
        write_method(writer, method)?;
    }
    close(writer, "methods")?;
    write_lines(writer, &class.lines)?;

    close(writer, "class")
}

fn write_method<W: Write>(writer: &mut Writer<W>, method: &MethodReport) -> Result<()> {
    let mut start = BytesStart::new("method");
    start.push_attribute(("name", method.name.as_str()));
    start.push_attribute(("signature", ""));
    start.push_attribute(("line-rate", fmt_rate(method.line_rate).as_str()));
    start.push_attribute(("branch-rate", "0"));
    start.push_attribute(("line-count", method.line_count.to_string().as_str()));
    start.push_attribute(("line-hits", method.line_hits.to_string().as_str()));
    writer.write_event(Event::Start(start))?;

    write_lines(writer, &method.lines)?;

    close(writer, "method")
}

fn write_lines<W: Write>(writer: &mut Writer<W>, lines: &[Line]) -> Result<()> {
    if lines.is_empty() {
        return empty(writer, "lines");
    }
    open(writer, "lines")?;
    for line in lines {
        let mut elem = BytesStart::new("line");
        elem.push_attribute(("number", line.number.to_string().as_str()));
        elem.push_attribute(("hits", line.hits.to_string().as_str()));
        writer.write_event(Event::Empty(elem))?;
    }
    close(writer, "lines")
}

fn open<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn close<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn empty<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::Empty(BytesStart::new(name)))?;
    Ok(())
}

/// Shortest round-trip form: `0.5`, `1`, `NaN`.
fn fmt_rate(rate: f64) -> String {
    rate.to_string()
}
