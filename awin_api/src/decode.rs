//! Turns response bodies into typed records.
//!
//! Both endpoints answer with a header row followed by one row per record.
//! Feed downloads are additionally gzip-compressed and are inflated in full
//! before any CSV parsing starts, so a bad stream is reported as
//! [`Error::Decompression`] and never as a CSV error.

use std::borrow::Cow;
use std::io::Read;

use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

use crate::types::{FeedEntry, FeedListRow};
use crate::Error;

/// How CSV cells are matched to record fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnMapping {
    /// Skip the header row and assign cells by index, in field declaration order.
    #[default]
    ByPosition,
    /// Read the header row and assign cells by column name. A missing column
    /// is an error; extra columns are ignored.
    ByHeader,
}

/// Inflates a complete gzip stream.
pub fn gunzip(compressed: &[u8]) -> Result<Vec<u8>, Error> {
    let mut decoder = GzDecoder::new(compressed);
    let mut plain = Vec::new();
    decoder
        .read_to_end(&mut plain)
        .map_err(Error::Decompression)?;
    Ok(plain)
}

/// First two bytes of every gzip stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Inflates a feed body unless it has already been inflated.
///
/// A reqwest client with its `gzip` feature enabled decodes
/// `Content-Encoding: gzip` responses on its own, so a feed can arrive as
/// plain CSV. Bodies starting with [`GZIP_MAGIC`] are always inflated and a
/// corrupt stream is still [`Error::Decompression`]; anything else is passed
/// through unchanged.
pub fn inflate_feed(body: &[u8]) -> Result<Cow<'_, [u8]>, Error> {
    if body.starts_with(&GZIP_MAGIC) {
        Ok(Cow::Owned(gunzip(body)?))
    } else {
        tracing::debug!("Feed body is not gzip-framed, treating it as already inflated");
        Ok(Cow::Borrowed(body))
    }
}

/// Parses CSV `bytes` into records of type `T`.
///
/// The first row is always treated as the header. Any malformed or short row
/// aborts the whole decode; no partial result is returned. Invalid UTF-8 is
/// not an error: offending bytes are replaced with U+FFFD.
pub fn decode_csv<T: DeserializeOwned>(bytes: &[u8], mapping: ColumnMapping) -> Result<Vec<T>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);
    let headers = match mapping {
        ColumnMapping::ByPosition => None,
        ColumnMapping::ByHeader => Some(csv::StringRecord::from_byte_record_lossy(
            reader.byte_headers()?.clone(),
        )),
    };

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        // Merchants do not all export UTF-8; bad sequences become U+FFFD.
        let record = csv::StringRecord::from_byte_record_lossy(record?);
        rows.push(record.deserialize(headers.as_ref())?);
    }
    tracing::debug!("Decoded {} rows", rows.len());
    Ok(rows)
}

/// Decodes a plain-text feed list response.
pub fn decode_feed_list_csv(bytes: &[u8]) -> Result<Vec<FeedListRow>, Error> {
    decode_csv(bytes, ColumnMapping::ByPosition)
}

/// Decodes a gzip-compressed feed download.
pub fn decode_feed_entry_csv(bytes: &[u8]) -> Result<Vec<FeedEntry>, Error> {
    let plain = gunzip(bytes)?;
    decode_csv(&plain, ColumnMapping::ByPosition)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{write::GzEncoder, Compression};

    use super::*;
    use crate::schema::FEED_COLUMNS;

    const FEED_LIST: &str = "Advertiser ID,Advertiser Name,Primary Region,Membership Status,Feed ID,Feed Name,Language,Vertical,Last Imported,Last Checked,No of products,URL
1001,Shop One,DE,active,2001,Shop One DE,de,Fashion,2024-01-01 10:00:00,2024-01-02 10:00:00,150,https://example.com/1
1002,\"Shop, Two\",GB,notjoined,2002,Shop Two GB,en,Electronics,,,0,https://example.com/2
";

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn feed_csv(rows: usize) -> String {
        let mut csv = FEED_COLUMNS.join(",");
        csv.push('\n');
        for row in 0..rows {
            let cells: Vec<String> = (0..FEED_COLUMNS.len())
                .map(|col| format!("r{}c{}", row, col))
                .collect();
            csv.push_str(&cells.join(","));
            csv.push('\n');
        }
        csv
    }

    #[test]
    fn feed_list_by_position() {
        let rows = decode_feed_list_csv(FEED_LIST.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].advertiser_id, "1001");
        assert_eq!(rows[0].no_of_products, "150");
        assert_eq!(rows[0].url, "https://example.com/1");
        assert_eq!(rows[1].advertiser_name, "Shop, Two");
        assert_eq!(rows[1].last_imported, "");
        assert_eq!(rows[1].membership_status, "notjoined");
    }

    #[test]
    fn header_row_is_not_validated_by_position() {
        let csv = FEED_LIST.replacen("Advertiser ID", "whatever", 1);
        let rows = decode_feed_list_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].advertiser_id, "1001");
    }

    #[test]
    fn by_header_matches_by_position_for_upstream_headers() {
        let by_header: Vec<FeedListRow> = decode_csv(FEED_LIST.as_bytes(), ColumnMapping::ByHeader).unwrap();
        assert_eq!(by_header, decode_feed_list_csv(FEED_LIST.as_bytes()).unwrap());
    }

    #[test]
    fn by_header_follows_names_not_order() {
        let mut columns = FEED_COLUMNS.to_vec();
        columns.swap(0, 1);
        let header = columns.join(",");
        let row: Vec<String> = columns.iter().map(|c| format!("v_{}", c)).collect();
        let csv = format!("{}\n{}\n", header, row.join(","));

        let entries: Vec<FeedEntry> = decode_csv(csv.as_bytes(), ColumnMapping::ByHeader).unwrap();
        assert_eq!(entries[0].aw_deep_link, "v_aw_deep_link");
        assert_eq!(entries[0].product_name, "v_product_name");
        assert_eq!(entries[0].product_gtin, "v_product_GTIN");

        let entries: Vec<FeedEntry> = decode_csv(csv.as_bytes(), ColumnMapping::ByPosition).unwrap();
        assert_eq!(entries[0].aw_deep_link, "v_product_name");
    }

    #[test]
    fn by_header_missing_column_is_error() {
        let csv = "Advertiser ID,Advertiser Name\n1,Shop\n";
        let result: Result<Vec<FeedListRow>, _> = decode_csv(csv.as_bytes(), ColumnMapping::ByHeader);
        assert!(matches!(result, Err(Error::Csv(_))));
    }

    #[test]
    fn short_rows_are_errors() {
        let csv = "a,b\n1,2\n";
        assert!(matches!(decode_feed_list_csv(csv.as_bytes()), Err(Error::Csv(_))));
    }

    #[test]
    fn ragged_row_aborts_decode() {
        let csv = format!("{}1003,only,three\n", FEED_LIST);
        assert!(matches!(decode_feed_list_csv(csv.as_bytes()), Err(Error::Csv(_))));
    }

    #[test]
    fn unterminated_quote_aborts_decode() {
        let csv = format!(
            "{}1003,\"Shop,GB,active,2003,Name,en,V,a,b,1,https://example.com/3\n",
            FEED_LIST
        );
        assert!(decode_feed_list_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn header_only_and_empty_bodies_yield_no_rows() {
        let header = FEED_LIST.lines().next().unwrap();
        assert!(decode_feed_list_csv(header.as_bytes()).unwrap().is_empty());
        assert!(decode_feed_list_csv(b"").unwrap().is_empty());
    }

    #[test]
    fn feed_entries_are_positional() {
        let csv = feed_csv(3);
        let entries = decode_feed_entry_csv(&gzip(csv.as_bytes())).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].aw_deep_link, "r0c0");
        assert_eq!(entries[1].data_feed_id, "r1c20");
        assert_eq!(entries[2].custom_9, "r2c78");
        assert_eq!(entries[2].product_gtin, "r2c84");
        assert_eq!(entries[2].basket_link, "r2c85");
    }

    #[test]
    fn gzip_round_trip_matches_plain_decode() {
        let csv = feed_csv(5);
        let plain: Vec<FeedEntry> = decode_csv(csv.as_bytes(), ColumnMapping::ByPosition).unwrap();
        let compressed = decode_feed_entry_csv(&gzip(csv.as_bytes())).unwrap();
        assert_eq!(plain, compressed);
    }

    #[test]
    fn malformed_gzip_is_decompression_error() {
        let result = decode_feed_entry_csv(feed_csv(1).as_bytes());
        assert!(matches!(result, Err(Error::Decompression(_))));
    }

    #[test]
    fn invalid_utf8_cells_are_decoded_lossily() {
        let mut csv = FEED_LIST.lines().next().unwrap().as_bytes().to_vec();
        csv.extend_from_slice(b"\n1,Caf\xe9,FR,active,2,F,fr,V,a,b,1,u\n");

        let rows = decode_feed_list_csv(&csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].advertiser_name, "Caf\u{FFFD}");
        assert_eq!(rows[0].primary_region, "FR");

        let by_header: Vec<FeedListRow> = decode_csv(&csv, ColumnMapping::ByHeader).unwrap();
        assert_eq!(by_header, rows);
    }

    #[test]
    fn invalid_utf8_in_header_still_maps_by_position() {
        let csv = b"Adv\xe9rtiser ID,b,c,d,e,f,g,h,i,j,k,l\n1,2,3,4,5,6,7,8,9,10,11,12\n";
        let rows = decode_feed_list_csv(csv).unwrap();
        assert_eq!(rows[0].url, "12");
    }

    #[test]
    fn inflate_feed_passes_plain_csv_through() {
        let csv = feed_csv(2);
        let body = inflate_feed(csv.as_bytes()).unwrap();
        assert!(matches!(body, Cow::Borrowed(_)));
        assert_eq!(&*body, csv.as_bytes());
    }

    #[test]
    fn inflate_feed_inflates_gzip() {
        let csv = feed_csv(2);
        let gz = gzip(csv.as_bytes());
        let body = inflate_feed(&gz).unwrap();
        assert_eq!(&*body, csv.as_bytes());
    }

    #[test]
    fn inflate_feed_rejects_corrupt_gzip() {
        let mut compressed = gzip(feed_csv(2).as_bytes());
        // Break the CRC32 in the trailer.
        let crc = compressed.len() - 8;
        compressed[crc] ^= 0xff;
        assert!(matches!(inflate_feed(&compressed), Err(Error::Decompression(_))));
    }

    #[test]
    fn invalid_csv_inside_valid_gzip_is_csv_error() {
        let result = decode_feed_entry_csv(&gzip(b"aw_deep_link,product_name\nonly-one\n"));
        assert!(matches!(result, Err(Error::Csv(_))));
    }
}
