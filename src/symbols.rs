//! Replacement table for legacy `QVariant::Type` enumerators.
//!
//! Built once, read-only afterwards. Keys are bare enumerator names
//! without qualification; lookups are exact-string and case-sensitive.
//! An absent key and an empty replacement both mean "no automatic
//! rename" - not every legacy enumerator has a `QMetaType` counterpart.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Bare legacy enumerator name paired with its `QMetaType` replacement.
/// `LastCoreType` and `LastGuiType` are internal range markers of the
/// legacy enumeration; they keep their entries but carry no replacement.
const VARIANT_TO_META_TYPE: &[(&str, &str)] = &[
    ("Invalid", "UnknownType"),
    ("Bool", "Bool"),
    ("Int", "Int"),
    ("UInt", "UInt"),
    ("LongLong", "LongLong"),
    ("ULongLong", "ULongLong"),
    ("Double", "Double"),
    ("Char", "QChar"),
    ("Map", "QVariantMap"),
    ("List", "QVariantList"),
    ("String", "QString"),
    ("StringList", "QStringList"),
    ("ByteArray", "QByteArray"),
    ("BitArray", "QBitArray"),
    ("Date", "QDate"),
    ("Time", "QTime"),
    ("DateTime", "QDateTime"),
    ("Url", "QUrl"),
    ("Locale", "QLocale"),
    ("Rect", "QRect"),
    ("RectF", "QRectF"),
    ("Size", "QSize"),
    ("SizeF", "QSizeF"),
    ("Line", "QLine"),
    ("LineF", "QLineF"),
    ("Point", "QPoint"),
    ("PointF", "QPointF"),
    ("RegExp", "QRegExp"),
    ("RegularExpression", "QRegularExpression"),
    ("Hash", "QVariantHash"),
    ("EasingCurve", "QEasingCurve"),
    ("Uuid", "QUuid"),
    ("ModelIndex", "QModelIndex"),
    ("PersistentModelIndex", "QPersistentModelIndex"),
    ("LastCoreType", ""),
    ("Font", "QFont"),
    ("Pixmap", "QPixmap"),
    ("Brush", "QBrush"),
    ("Color", "QColor"),
    ("Palette", "QPalette"),
    ("Image", "QImage"),
    ("Polygon", "QPolygon"),
    ("Region", "QRegion"),
    ("Bitmap", "QBitmap"),
    ("Cursor", "QCursor"),
    ("KeySequence", "QKeySequence"),
    ("Pen", "QPen"),
    ("TextLength", "QTextLength"),
    ("TextFormat", "QTextFormat"),
    ("Matrix", "QMatrix"),
    ("Transform", "QTransform"),
    ("Matrix4x4", "QMatrix4x4"),
    ("Vector2D", "QVector2D"),
    ("Vector3D", "QVector3D"),
    ("Vector4D", "QVector4D"),
    ("Quaternion", "QQuaternion"),
    ("PolygonF", "QPolygonF"),
    ("Icon", "QIcon"),
    ("LastGuiType", ""),
    ("SizePolicy", "QSizePolicy"),
    ("UserType", "User"),
];

fn replacement_table() -> &'static FxHashMap<&'static str, &'static str> {
    static TABLE: OnceLock<FxHashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| VARIANT_TO_META_TYPE.iter().copied().collect())
}

/// Returns the `QMetaType` name replacing the legacy enumerator `name`,
/// or `None` when the enumerator has no automatic replacement (unknown
/// key, or a sentinel entry with an empty replacement).
#[must_use]
pub fn variant_to_meta_type(name: &str) -> Option<&'static str> {
    replacement_table()
        .get(name)
        .copied()
        .filter(|replacement| !replacement.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_renamed_enumerators() {
        assert_eq!(variant_to_meta_type("Map"), Some("QVariantMap"));
        assert_eq!(variant_to_meta_type("Invalid"), Some("UnknownType"));
        assert_eq!(variant_to_meta_type("UserType"), Some("User"));
    }

    #[test]
    fn test_keeps_identity_renames_actionable() {
        // Same bare name, but the qualifier changes to QMetaType.
        assert_eq!(variant_to_meta_type("Bool"), Some("Bool"));
        assert_eq!(variant_to_meta_type("Double"), Some("Double"));
    }

    #[test]
    fn test_sentinels_have_no_replacement() {
        assert_eq!(variant_to_meta_type("LastCoreType"), None);
        assert_eq!(variant_to_meta_type("LastGuiType"), None);
    }

    #[test]
    fn test_unknown_names_miss() {
        assert_eq!(variant_to_meta_type("LastType"), None);
        assert_eq!(variant_to_meta_type("map"), None);
        assert_eq!(variant_to_meta_type(""), None);
    }
}
