//! SOAP envelope framing and namespace constants.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

/// SOAP 1.1 envelope namespace.
pub const SOAP_NS_URI: &str = "http://schemas.xmlsoap.org/soap/envelope/";
/// Operation-level vocabulary (operations, containers, response messages).
pub const MESSAGES_NS_URI: &str = "http://schemas.microsoft.com/exchange/services/2006/messages";
/// Object-level vocabulary (items, fields, identifiers).
pub const TYPES_NS_URI: &str = "http://schemas.microsoft.com/exchange/services/2006/types";

/// Write the document prolog and open `soap:Envelope` / `soap:Body`.
///
/// The envelope declares all three namespace prefixes once; every element
/// below uses a prefix, so the body writers never repeat declarations.
pub(super) fn open(writer: &mut Writer<Vec<u8>>) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("soap:Envelope").with_attributes([
            ("xmlns:soap", SOAP_NS_URI),
            ("xmlns:m", MESSAGES_NS_URI),
            ("xmlns:t", TYPES_NS_URI),
        ]),
    ))?;
    writer.write_event(Event::Start(BytesStart::new("soap:Body")))?;
    Ok(())
}

/// Close `soap:Body` and `soap:Envelope`.
pub(super) fn close(writer: &mut Writer<Vec<u8>>) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::End(BytesEnd::new("soap:Body")))?;
    writer.write_event(Event::End(BytesEnd::new("soap:Envelope")))?;
    Ok(())
}
