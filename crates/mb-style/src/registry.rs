//! Style Property Registry
//!
//! Every inline style property the declaration engine knows about.
//! Uses an enum so declarations key on a 2-byte id instead of a string.

use mb_shared::to_camel_case;

macro_rules! style_properties {
    ($($variant:ident => $name:literal, $dashed:literal,)*) => {
        /// Recognised style property
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum PropertyId {
            $($variant,)*
        }
        
        impl PropertyId {
            /// Every property, in registry order
            pub const ALL: &'static [PropertyId] = &[$(PropertyId::$variant,)*];
            
            /// Internal camel-case name
            pub const fn name(self) -> &'static str {
                match self {
                    $(PropertyId::$variant => $name,)*
                }
            }
            
            /// Dashed name used when serializing
            pub const fn dashed_name(self) -> &'static str {
                match self {
                    $(PropertyId::$variant => $dashed,)*
                }
            }
            
            fn from_camel(name: &str) -> Option<Self> {
                Some(match name {
                    $($name => PropertyId::$variant,)*
                    _ => return None,
                })
            }
        }
    };
}

style_properties! {
    AlignContent => "alignContent", "align-content",
    AlignItems => "alignItems", "align-items",
    AlignSelf => "alignSelf", "align-self",
    AlignmentBaseline => "alignmentBaseline", "alignment-baseline",
    All => "all", "all",
    Animation => "animation", "animation",
    AnimationDelay => "animationDelay", "animation-delay",
    AnimationDirection => "animationDirection", "animation-direction",
    AnimationDuration => "animationDuration", "animation-duration",
    AnimationFillMode => "animationFillMode", "animation-fill-mode",
    AnimationIterationCount => "animationIterationCount", "animation-iteration-count",
    AnimationName => "animationName", "animation-name",
    AnimationPlayState => "animationPlayState", "animation-play-state",
    AnimationTimingFunction => "animationTimingFunction", "animation-timing-function",
    Appearance => "appearance", "appearance",
    BackfaceVisibility => "backfaceVisibility", "backface-visibility",
    Background => "background", "background",
    BackgroundAttachment => "backgroundAttachment", "background-attachment",
    BackgroundBlendMode => "backgroundBlendMode", "background-blend-mode",
    BackgroundClip => "backgroundClip", "background-clip",
    BackgroundColor => "backgroundColor", "background-color",
    BackgroundImage => "backgroundImage", "background-image",
    BackgroundOrigin => "backgroundOrigin", "background-origin",
    BackgroundPosition => "backgroundPosition", "background-position",
    BackgroundPositionX => "backgroundPositionX", "background-position-x",
    BackgroundPositionY => "backgroundPositionY", "background-position-y",
    BackgroundRepeat => "backgroundRepeat", "background-repeat",
    BackgroundSize => "backgroundSize", "background-size",
    BaselineShift => "baselineShift", "baseline-shift",
    BlockSize => "blockSize", "block-size",
    Border => "border", "border",
    BorderBlock => "borderBlock", "border-block",
    BorderBlockColor => "borderBlockColor", "border-block-color",
    BorderBlockEnd => "borderBlockEnd", "border-block-end",
    BorderBlockStart => "borderBlockStart", "border-block-start",
    BorderBlockStyle => "borderBlockStyle", "border-block-style",
    BorderBlockWidth => "borderBlockWidth", "border-block-width",
    BorderBottom => "borderBottom", "border-bottom",
    BorderBottomColor => "borderBottomColor", "border-bottom-color",
    BorderBottomLeftRadius => "borderBottomLeftRadius", "border-bottom-left-radius",
    BorderBottomRightRadius => "borderBottomRightRadius", "border-bottom-right-radius",
    BorderBottomStyle => "borderBottomStyle", "border-bottom-style",
    BorderBottomWidth => "borderBottomWidth", "border-bottom-width",
    BorderCollapse => "borderCollapse", "border-collapse",
    BorderColor => "borderColor", "border-color",
    BorderImage => "borderImage", "border-image",
    BorderImageOutset => "borderImageOutset", "border-image-outset",
    BorderImageRepeat => "borderImageRepeat", "border-image-repeat",
    BorderImageSlice => "borderImageSlice", "border-image-slice",
    BorderImageSource => "borderImageSource", "border-image-source",
    BorderImageWidth => "borderImageWidth", "border-image-width",
    BorderInline => "borderInline", "border-inline",
    BorderInlineColor => "borderInlineColor", "border-inline-color",
    BorderInlineEnd => "borderInlineEnd", "border-inline-end",
    BorderInlineStart => "borderInlineStart", "border-inline-start",
    BorderInlineStyle => "borderInlineStyle", "border-inline-style",
    BorderInlineWidth => "borderInlineWidth", "border-inline-width",
    BorderLeft => "borderLeft", "border-left",
    BorderLeftColor => "borderLeftColor", "border-left-color",
    BorderLeftStyle => "borderLeftStyle", "border-left-style",
    BorderLeftWidth => "borderLeftWidth", "border-left-width",
    BorderRadius => "borderRadius", "border-radius",
    BorderRight => "borderRight", "border-right",
    BorderRightColor => "borderRightColor", "border-right-color",
    BorderRightStyle => "borderRightStyle", "border-right-style",
    BorderRightWidth => "borderRightWidth", "border-right-width",
    BorderSpacing => "borderSpacing", "border-spacing",
    BorderStyle => "borderStyle", "border-style",
    BorderTop => "borderTop", "border-top",
    BorderTopColor => "borderTopColor", "border-top-color",
    BorderTopLeftRadius => "borderTopLeftRadius", "border-top-left-radius",
    BorderTopRightRadius => "borderTopRightRadius", "border-top-right-radius",
    BorderTopStyle => "borderTopStyle", "border-top-style",
    BorderTopWidth => "borderTopWidth", "border-top-width",
    BorderWidth => "borderWidth", "border-width",
    Bottom => "bottom", "bottom",
    BoxShadow => "boxShadow", "box-shadow",
    BoxSizing => "boxSizing", "box-sizing",
    BreakAfter => "breakAfter", "break-after",
    BreakBefore => "breakBefore", "break-before",
    BreakInside => "breakInside", "break-inside",
    CaptionSide => "captionSide", "caption-side",
    CaretColor => "caretColor", "caret-color",
    Clear => "clear", "clear",
    Clip => "clip", "clip",
    ClipPath => "clipPath", "clip-path",
    ClipRule => "clipRule", "clip-rule",
    Color => "color", "color",
    ColorInterpolation => "colorInterpolation", "color-interpolation",
    ColorRendering => "colorRendering", "color-rendering",
    ColumnCount => "columnCount", "column-count",
    ColumnFill => "columnFill", "column-fill",
    ColumnGap => "columnGap", "column-gap",
    ColumnRule => "columnRule", "column-rule",
    ColumnRuleColor => "columnRuleColor", "column-rule-color",
    ColumnRuleStyle => "columnRuleStyle", "column-rule-style",
    ColumnRuleWidth => "columnRuleWidth", "column-rule-width",
    ColumnSpan => "columnSpan", "column-span",
    ColumnWidth => "columnWidth", "column-width",
    Columns => "columns", "columns",
    Content => "content", "content",
    CounterIncrement => "counterIncrement", "counter-increment",
    CounterReset => "counterReset", "counter-reset",
    Cursor => "cursor", "cursor",
    Direction => "direction", "direction",
    Display => "display", "display",
    DominantBaseline => "dominantBaseline", "dominant-baseline",
    EmptyCells => "emptyCells", "empty-cells",
    Fill => "fill", "fill",
    FillOpacity => "fillOpacity", "fill-opacity",
    FillRule => "fillRule", "fill-rule",
    Filter => "filter", "filter",
    Flex => "flex", "flex",
    FlexBasis => "flexBasis", "flex-basis",
    FlexDirection => "flexDirection", "flex-direction",
    FlexFlow => "flexFlow", "flex-flow",
    FlexGrow => "flexGrow", "flex-grow",
    FlexShrink => "flexShrink", "flex-shrink",
    FlexWrap => "flexWrap", "flex-wrap",
    Float => "float", "float",
    FloodColor => "floodColor", "flood-color",
    FloodOpacity => "floodOpacity", "flood-opacity",
    Font => "font", "font",
    FontFamily => "fontFamily", "font-family",
    FontFeatureSettings => "fontFeatureSettings", "font-feature-settings",
    FontKerning => "fontKerning", "font-kerning",
    FontSize => "fontSize", "font-size",
    FontSizeAdjust => "fontSizeAdjust", "font-size-adjust",
    FontStretch => "fontStretch", "font-stretch",
    FontStyle => "fontStyle", "font-style",
    FontVariant => "fontVariant", "font-variant",
    FontVariantCaps => "fontVariantCaps", "font-variant-caps",
    FontWeight => "fontWeight", "font-weight",
    Gap => "gap", "gap",
    Grid => "grid", "grid",
    GridArea => "gridArea", "grid-area",
    GridAutoColumns => "gridAutoColumns", "grid-auto-columns",
    GridAutoFlow => "gridAutoFlow", "grid-auto-flow",
    GridAutoRows => "gridAutoRows", "grid-auto-rows",
    GridColumn => "gridColumn", "grid-column",
    GridColumnEnd => "gridColumnEnd", "grid-column-end",
    GridColumnGap => "gridColumnGap", "grid-column-gap",
    GridColumnStart => "gridColumnStart", "grid-column-start",
    GridGap => "gridGap", "grid-gap",
    GridRow => "gridRow", "grid-row",
    GridRowEnd => "gridRowEnd", "grid-row-end",
    GridRowGap => "gridRowGap", "grid-row-gap",
    GridRowStart => "gridRowStart", "grid-row-start",
    GridTemplate => "gridTemplate", "grid-template",
    GridTemplateAreas => "gridTemplateAreas", "grid-template-areas",
    GridTemplateColumns => "gridTemplateColumns", "grid-template-columns",
    GridTemplateRows => "gridTemplateRows", "grid-template-rows",
    Height => "height", "height",
    Hyphens => "hyphens", "hyphens",
    ImageRendering => "imageRendering", "image-rendering",
    InlineSize => "inlineSize", "inline-size",
    Isolation => "isolation", "isolation",
    JustifyContent => "justifyContent", "justify-content",
    JustifyItems => "justifyItems", "justify-items",
    JustifySelf => "justifySelf", "justify-self",
    Left => "left", "left",
    LetterSpacing => "letterSpacing", "letter-spacing",
    LightingColor => "lightingColor", "lighting-color",
    LineBreak => "lineBreak", "line-break",
    LineHeight => "lineHeight", "line-height",
    ListStyle => "listStyle", "list-style",
    ListStyleImage => "listStyleImage", "list-style-image",
    ListStylePosition => "listStylePosition", "list-style-position",
    ListStyleType => "listStyleType", "list-style-type",
    Margin => "margin", "margin",
    MarginBlockEnd => "marginBlockEnd", "margin-block-end",
    MarginBlockStart => "marginBlockStart", "margin-block-start",
    MarginBottom => "marginBottom", "margin-bottom",
    MarginInlineEnd => "marginInlineEnd", "margin-inline-end",
    MarginInlineStart => "marginInlineStart", "margin-inline-start",
    MarginLeft => "marginLeft", "margin-left",
    MarginRight => "marginRight", "margin-right",
    MarginTop => "marginTop", "margin-top",
    Marker => "marker", "marker",
    Mask => "mask", "mask",
    MaskImage => "maskImage", "mask-image",
    MaskPosition => "maskPosition", "mask-position",
    MaskRepeat => "maskRepeat", "mask-repeat",
    MaskSize => "maskSize", "mask-size",
    MaxBlockSize => "maxBlockSize", "max-block-size",
    MaxHeight => "maxHeight", "max-height",
    MaxInlineSize => "maxInlineSize", "max-inline-size",
    MaxWidth => "maxWidth", "max-width",
    MinBlockSize => "minBlockSize", "min-block-size",
    MinHeight => "minHeight", "min-height",
    MinInlineSize => "minInlineSize", "min-inline-size",
    MinWidth => "minWidth", "min-width",
    MixBlendMode => "mixBlendMode", "mix-blend-mode",
    ObjectFit => "objectFit", "object-fit",
    ObjectPosition => "objectPosition", "object-position",
    Opacity => "opacity", "opacity",
    Order => "order", "order",
    Orphans => "orphans", "orphans",
    Outline => "outline", "outline",
    OutlineColor => "outlineColor", "outline-color",
    OutlineOffset => "outlineOffset", "outline-offset",
    OutlineStyle => "outlineStyle", "outline-style",
    OutlineWidth => "outlineWidth", "outline-width",
    Overflow => "overflow", "overflow",
    OverflowAnchor => "overflowAnchor", "overflow-anchor",
    OverflowWrap => "overflowWrap", "overflow-wrap",
    OverflowX => "overflowX", "overflow-x",
    OverflowY => "overflowY", "overflow-y",
    Padding => "padding", "padding",
    PaddingBlockEnd => "paddingBlockEnd", "padding-block-end",
    PaddingBlockStart => "paddingBlockStart", "padding-block-start",
    PaddingBottom => "paddingBottom", "padding-bottom",
    PaddingInlineEnd => "paddingInlineEnd", "padding-inline-end",
    PaddingInlineStart => "paddingInlineStart", "padding-inline-start",
    PaddingLeft => "paddingLeft", "padding-left",
    PaddingRight => "paddingRight", "padding-right",
    PaddingTop => "paddingTop", "padding-top",
    PageBreakAfter => "pageBreakAfter", "page-break-after",
    PageBreakBefore => "pageBreakBefore", "page-break-before",
    PageBreakInside => "pageBreakInside", "page-break-inside",
    Perspective => "perspective", "perspective",
    PerspectiveOrigin => "perspectiveOrigin", "perspective-origin",
    PointerEvents => "pointerEvents", "pointer-events",
    Position => "position", "position",
    Quotes => "quotes", "quotes",
    Resize => "resize", "resize",
    Right => "right", "right",
    RowGap => "rowGap", "row-gap",
    ScrollBehavior => "scrollBehavior", "scroll-behavior",
    ShapeRendering => "shapeRendering", "shape-rendering",
    StopColor => "stopColor", "stop-color",
    StopOpacity => "stopOpacity", "stop-opacity",
    Stroke => "stroke", "stroke",
    StrokeDasharray => "strokeDasharray", "stroke-dasharray",
    StrokeDashoffset => "strokeDashoffset", "stroke-dashoffset",
    StrokeLinecap => "strokeLinecap", "stroke-linecap",
    StrokeLinejoin => "strokeLinejoin", "stroke-linejoin",
    StrokeMiterlimit => "strokeMiterlimit", "stroke-miterlimit",
    StrokeOpacity => "strokeOpacity", "stroke-opacity",
    StrokeWidth => "strokeWidth", "stroke-width",
    TabSize => "tabSize", "tab-size",
    TableLayout => "tableLayout", "table-layout",
    TextAlign => "textAlign", "text-align",
    TextAlignLast => "textAlignLast", "text-align-last",
    TextAnchor => "textAnchor", "text-anchor",
    TextCombineUpright => "textCombineUpright", "text-combine-upright",
    TextDecoration => "textDecoration", "text-decoration",
    TextDecorationColor => "textDecorationColor", "text-decoration-color",
    TextDecorationLine => "textDecorationLine", "text-decoration-line",
    TextDecorationStyle => "textDecorationStyle", "text-decoration-style",
    TextIndent => "textIndent", "text-indent",
    TextOrientation => "textOrientation", "text-orientation",
    TextOverflow => "textOverflow", "text-overflow",
    TextRendering => "textRendering", "text-rendering",
    TextShadow => "textShadow", "text-shadow",
    TextTransform => "textTransform", "text-transform",
    TextUnderlinePosition => "textUnderlinePosition", "text-underline-position",
    Top => "top", "top",
    TouchAction => "touchAction", "touch-action",
    Transform => "transform", "transform",
    TransformBox => "transformBox", "transform-box",
    TransformOrigin => "transformOrigin", "transform-origin",
    TransformStyle => "transformStyle", "transform-style",
    Transition => "transition", "transition",
    TransitionDelay => "transitionDelay", "transition-delay",
    TransitionDuration => "transitionDuration", "transition-duration",
    TransitionProperty => "transitionProperty", "transition-property",
    TransitionTimingFunction => "transitionTimingFunction", "transition-timing-function",
    UnicodeBidi => "unicodeBidi", "unicode-bidi",
    UserSelect => "userSelect", "user-select",
    VectorEffect => "vectorEffect", "vector-effect",
    VerticalAlign => "verticalAlign", "vertical-align",
    Visibility => "visibility", "visibility",
    WhiteSpace => "whiteSpace", "white-space",
    Widows => "widows", "widows",
    Width => "width", "width",
    WillChange => "willChange", "will-change",
    WordBreak => "wordBreak", "word-break",
    WordSpacing => "wordSpacing", "word-spacing",
    WordWrap => "wordWrap", "word-wrap",
    WritingMode => "writingMode", "writing-mode",
    ZIndex => "zIndex", "z-index",
    Zoom => "zoom", "zoom",
}

impl PropertyId {
    /// Number of registered properties
    pub const COUNT: usize = Self::ALL.len();
    
    /// Look up a property by camel-case or dashed name
    pub fn from_name(name: &str) -> Option<Self> {
        if name.contains('-') {
            Self::from_camel(&to_camel_case(name))
        } else {
            Self::from_camel(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    
    #[test]
    fn test_registry_is_large_and_unique() {
        assert!(PropertyId::COUNT > 200);
        let names: HashSet<_> = PropertyId::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), PropertyId::COUNT);
    }
    
    #[test]
    fn test_from_name_accepts_both_forms() {
        assert_eq!(PropertyId::from_name("backgroundColor"), Some(PropertyId::BackgroundColor));
        assert_eq!(PropertyId::from_name("background-color"), Some(PropertyId::BackgroundColor));
        assert_eq!(PropertyId::from_name("z-index"), Some(PropertyId::ZIndex));
        assert_eq!(PropertyId::from_name("not-a-property"), None);
        assert_eq!(PropertyId::from_name(""), None);
    }
    
    #[test]
    fn test_every_name_round_trips() {
        for &prop in PropertyId::ALL {
            assert_eq!(PropertyId::from_name(prop.name()), Some(prop));
            assert_eq!(PropertyId::from_name(prop.dashed_name()), Some(prop));
        }
    }
    
    #[test]
    fn test_dashed_literals_match_case_conversion() {
        for &prop in PropertyId::ALL {
            assert_eq!(prop.dashed_name(), mb_shared::to_dashed(prop.name()));
        }
    }
    
    #[test]
    fn test_dashed_name() {
        assert_eq!(PropertyId::BorderTopLeftRadius.dashed_name(), "border-top-left-radius");
        assert_eq!(PropertyId::Color.dashed_name(), "color");
    }
}
