//! Component Schema Table
//!
//! Host-neutral declaration of every built-in component. Attribute values
//! are defaults: `""` means "always read from instance data", anything else
//! is a literal (already single-quoted where the template needs a string).
//! Names starting with `bind` are events.

/// One component and its attributes, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSchema {
    /// Pascal-case component name
    pub name: &'static str,
    /// `(attribute, default)` pairs
    pub attributes: &'static [(&'static str, &'static str)],
}

/// Events that don't carry the `bind` prefix
pub const SPECIAL_EVENTS: &[&str] = &["htouchmove", "vtouchmove"];

/// Components whose value is driven by instance data on every update
pub const CONTROLLED_COMPONENTS: &[&str] = &[
    "input",
    "checkbox",
    "picker-view",
    "radio",
    "slider",
    "textarea",
];

/// Components that can hold keyboard focus
pub const FOCUS_COMPONENTS: &[&str] = &["input", "textarea", "editor"];

/// Is `tag` a controlled form component?
pub fn is_controlled(tag: &str) -> bool {
    CONTROLLED_COMPONENTS.contains(&tag)
}

/// Can `tag` receive focus?
pub fn is_focus_component(tag: &str) -> bool {
    FOCUS_COMPONENTS.contains(&tag)
}

/// Every built-in component
pub static INTERNAL_COMPONENTS: &[ComponentSchema] = &[
    ComponentSchema {
        name: "View",
        attributes: &[
            ("hover-class", "'none'"),
            ("hover-stop-propagation", "false"),
            ("hover-start-time", "50"),
            ("hover-stay-time", "400"),
            ("animation", ""),
            ("bindTouchStart", ""),
            ("bindTouchMove", ""),
            ("bindTouchEnd", ""),
            ("bindTouchCancel", ""),
            ("bindLongTap", ""),
        ],
    },
    ComponentSchema {
        name: "Icon",
        attributes: &[
            ("type", ""),
            ("size", "23"),
            ("color", ""),
        ],
    },
    ComponentSchema {
        name: "Progress",
        attributes: &[
            ("percent", ""),
            ("show-info", "fasle"),
            ("border-radius", "0"),
            ("font-size", "16"),
            ("stroke-width", "6"),
            ("color", "'#09BB07'"),
            ("activeColor", "'#09BB07'"),
            ("backgroundColor", "'#EBEBEB'"),
            ("active", "false"),
            ("active-mode", "backwards"),
            ("duration", "30"),
            ("bindActiveEnd", ""),
        ],
    },
    ComponentSchema {
        name: "RichText",
        attributes: &[
            ("nodes", "[]"),
            ("space", ""),
        ],
    },
    ComponentSchema {
        name: "Text",
        attributes: &[
            ("selectable", "false"),
            ("space", ""),
            ("decode", "false"),
        ],
    },
    ComponentSchema {
        name: "Button",
        attributes: &[
            ("size", "'default'"),
            ("type", "'default'"),
            ("plain", "false"),
            ("disabled", ""),
            ("loading", "false"),
            ("form-type", ""),
            ("open-type", ""),
            ("hover-class", "'button-hover'"),
            ("hover-stop-propagation", "false"),
            ("hover-start-time", "20"),
            ("hover-stay-time", "70"),
            ("lang", "en"),
            ("session-from", ""),
            ("send-message-title", ""),
            ("send-message-path", ""),
            ("send-message-img", ""),
            ("app-parameter", ""),
            ("show-message-card", "false"),
            ("bindGetUserInfo", ""),
            ("bindContact", ""),
            ("bindGetPhoneNumber", ""),
            ("bindError", ""),
            ("bindOpenSetting", ""),
            ("bindLaunchApp", ""),
        ],
    },
    ComponentSchema {
        name: "Checkbox",
        attributes: &[
            ("value", ""),
            ("disabled", ""),
            ("checked", "false"),
            ("color", "'#09BB07'"),
        ],
    },
    ComponentSchema {
        name: "CheckboxGroup",
        attributes: &[
            ("bindChange", ""),
        ],
    },
    ComponentSchema {
        name: "Editor",
        attributes: &[
            ("read-only", "false"),
            ("placeholder", ""),
            ("show-img-size", "false"),
            ("show-img-toolbar", "false"),
            ("show-img-resize", "false"),
            ("focus", "false"),
            ("bindReady", ""),
            ("bindFocus", ""),
            ("bindBlur", ""),
            ("bindInput", ""),
            ("bindStatusChange", ""),
        ],
    },
    ComponentSchema {
        name: "Form",
        attributes: &[
            ("report-submit", "false"),
            ("report-submit-timeout", "0"),
            ("bindSubmit", ""),
            ("bindReset", ""),
        ],
    },
    ComponentSchema {
        name: "Input",
        attributes: &[
            ("value", ""),
            ("type", "''"),
            ("password", "false"),
            ("placeholder", ""),
            ("placeholder-style", ""),
            ("placeholder-class", "'input-placeholder'"),
            ("disabled", ""),
            ("maxlength", "140"),
            ("cursor-spacing", "0"),
            ("auto-focus", "false"),
            ("focus", "false"),
            ("confirm-type", "'done'"),
            ("confirm-hold", "false"),
            ("cursor", ""),
            ("selection-start", "-1"),
            ("selection-end", "-1"),
            ("adjust-position", "true"),
            ("hold-keyboard", "false"),
            ("bindInput", ""),
            ("bindFocus", ""),
            ("bindBlur", ""),
            ("bindConfirm", ""),
            ("bindKeyboardHeightChange", ""),
        ],
    },
    ComponentSchema {
        name: "Label",
        attributes: &[
            ("for", ""),
        ],
    },
    ComponentSchema {
        name: "Picker",
        attributes: &[
            ("mode", "'selector'"),
            ("disabled", ""),
            ("bindCancel", ""),
        ],
    },
    ComponentSchema {
        name: "PickerView",
        attributes: &[
            ("value", ""),
            ("indicator-style", ""),
            ("indicator-class", ""),
            ("mask-style", ""),
            ("mask-class", ""),
            ("bindChange", ""),
            ("bindPickStart", ""),
            ("bindPickEnd", ""),
        ],
    },
    ComponentSchema {
        name: "PickerViewColumn",
        attributes: &[],
    },
    ComponentSchema {
        name: "Radio",
        attributes: &[
            ("value", ""),
            ("checked", "false"),
            ("disabled", ""),
            ("color", "'#09BB07'"),
        ],
    },
    ComponentSchema {
        name: "RadioGroup",
        attributes: &[
            ("bindChange", ""),
        ],
    },
    ComponentSchema {
        name: "Slider",
        attributes: &[
            ("min", "0"),
            ("max", "100"),
            ("step", "1"),
            ("disabled", ""),
            ("value", "0"),
            ("color", "'#e9e9e9'"),
            ("selected-color", "'#1aad19'"),
            ("activeColor", "'#1aad19'"),
            ("backgroundColor", "'#e9e9e9'"),
            ("block-size", "28"),
            ("block-color", "'#ffffff'"),
            ("show-value", "false"),
            ("bindChange", ""),
            ("bindChanging", ""),
        ],
    },
    ComponentSchema {
        name: "Switch",
        attributes: &[
            ("checked", "false"),
            ("disabled", ""),
            ("type", "'switch'"),
            ("color", "'#04BE02'"),
            ("bindChange", ""),
        ],
    },
    ComponentSchema {
        name: "CoverImage",
        attributes: &[
            ("src", ""),
            ("bindLoad", "eh"),
            ("bindError", "eh"),
        ],
    },
    ComponentSchema {
        name: "Textarea",
        attributes: &[
            ("value", ""),
            ("placeholder", ""),
            ("placeholder-style", ""),
            ("placeholder-class", "'textarea-placeholder'"),
            ("disabled", ""),
            ("maxlength", "140"),
            ("auto-focus", "false"),
            ("focus", "false"),
            ("auto-height", "false"),
            ("fixed", "false"),
            ("cursor-spacing", "0"),
            ("cursor", "-1"),
            ("show-confirm-bar", "true"),
            ("selection-start", "-1"),
            ("selection-end", "-1"),
            ("adjust-position", "true"),
            ("hold-keyboard", "false"),
            ("bindFocus", ""),
            ("bindBlur", ""),
            ("bindLineChange", ""),
            ("bindInput", ""),
            ("bindConfirm", ""),
            ("bindKeyboardHeightChange", ""),
        ],
    },
    ComponentSchema {
        name: "CoverView",
        attributes: &[
            ("scroll-top", "false"),
        ],
    },
    ComponentSchema {
        name: "MoveableArea",
        attributes: &[
            ("scale-area", "false"),
        ],
    },
    ComponentSchema {
        name: "MoveableView",
        attributes: &[
            ("direction", "none"),
            ("inertia", "false"),
            ("out-of-bounds", "false"),
            ("x", ""),
            ("y", ""),
            ("damping", "20"),
            ("friction", "2"),
            ("disabled", ""),
            ("scale", "false"),
            ("scale-min", "0.5"),
            ("scale-max", "10"),
            ("scale-value", "1"),
            ("animation", "true"),
            ("bindChange", ""),
            ("bindScale", ""),
            ("htouchmove", ""),
            ("vtouchmove", ""),
            ("width", "'10px'"),
            ("height", "'10px'"),
        ],
    },
    ComponentSchema {
        name: "ScrollView",
        attributes: &[
            ("scroll-x", "false"),
            ("scroll-y", "false"),
            ("upper-threshold", "50"),
            ("lower-threshold", "50"),
            ("scroll-top", ""),
            ("scroll-left", ""),
            ("scroll-into-view", ""),
            ("scroll-with-animation", "false"),
            ("enable-back-to-top", "false"),
            ("enable-flex", "false"),
            ("scroll-anchoring", " false"),
            ("bindScrolltoUpper", ""),
            ("bindScrolltoLower", ""),
            ("bindScroll", ""),
        ],
    },
    ComponentSchema {
        name: "Swiper",
        attributes: &[
            ("indicator-dots", "false"),
            ("indicator-color", "'rgba(0, 0, 0, .3)'"),
            ("indicator-active-color", "'#000000'"),
            ("autoplay", "fasle"),
            ("current", "0"),
            ("interval", "5000"),
            ("duration", "500"),
            ("circular", "false"),
            ("vertical", "fasle"),
            ("previous-margin", "'0px'"),
            ("next-margin", "'0px'"),
            ("display-multiple-items", "1"),
            ("skip-hidden-item-layout", "false"),
            ("easing-function", "'default'"),
            ("bindChange", ""),
            ("bindTransition", ""),
            ("bindAnimationFinish", ""),
        ],
    },
    ComponentSchema {
        name: "SwiperItem",
        attributes: &[
            ("item-id", ""),
        ],
    },
    ComponentSchema {
        name: "FunctionalPageNavigator",
        attributes: &[
            ("version", "'release'"),
            ("name", ""),
            ("args", ""),
            ("bindSuccess", ""),
            ("bindFail", ""),
            ("bindCancel", ""),
        ],
    },
    ComponentSchema {
        name: "Navigator",
        attributes: &[
            ("target", "'self'"),
            ("url", ""),
            ("open-type", "'navigate'"),
            ("delta", "1"),
            ("app-id", ""),
            ("path", ""),
            ("extra-data", ""),
            ("version", "'version'"),
            ("hover-class", "'navigator-hover'"),
            ("hover-stop-propagation", "false"),
            ("hover-start-time", "50"),
            ("hover-stay-time", "600"),
            ("bindSuccess", ""),
            ("bindFail", ""),
            ("bindComplete", ""),
        ],
    },
    ComponentSchema {
        name: "Audio",
        attributes: &[
            ("id", ""),
            ("src", ""),
            ("loop", "false"),
            ("controls", "false"),
            ("poster", ""),
            ("name", ""),
            ("author", ""),
            ("bindError", ""),
            ("bindPlay", ""),
            ("bindPause", ""),
            ("bindTimeUpdate", ""),
            ("bindEnded", ""),
        ],
    },
    ComponentSchema {
        name: "Camera",
        attributes: &[
            ("mode", "'normal'"),
            ("device-position", "'back'"),
            ("flash", "'auto'"),
            ("frame-size", "'medium'"),
            ("bindStop", ""),
            ("bindError", ""),
            ("bindInitDone", ""),
            ("bindScanCode", ""),
        ],
    },
    ComponentSchema {
        name: "Image",
        attributes: &[
            ("src", ""),
            ("mode", "'scaleToFill'"),
            ("webp", "false"),
            ("lazy-load", "false"),
            ("show-menu-by-longpress", "false"),
            ("bindError", ""),
            ("bindLoad", ""),
        ],
    },
    ComponentSchema {
        name: "LivePlayer",
        attributes: &[
            ("src", ""),
            ("mode", "'live'"),
            ("autoplay", "false"),
            ("muted", "false"),
            ("orientation", "'vertical'"),
            ("object-fit", "'contain'"),
            ("background-mute", "false"),
            ("min-cache", "1"),
            ("max-cache", "3"),
            ("sound-mode", "'speaker'"),
            ("auto-pause-if-navigate", "true"),
            ("auto-pause-if-open-native", "true"),
            ("bindStateChange", ""),
            ("bindFullScreenChange", ""),
            ("bindNetStatus", ""),
        ],
    },
    ComponentSchema {
        name: "Video",
        attributes: &[
            ("src", ""),
            ("duration", ""),
            ("controls", "true"),
            ("danmu-list", ""),
            ("danmu-btn", ""),
            ("enable-danmu", ""),
            ("autoplay", "false"),
            ("loop", "false"),
            ("muted", "false"),
            ("initial-time", "0"),
            ("page-gesture", "false"),
            ("direction", ""),
            ("show-progress", "true"),
            ("show-fullscreen-btn", "true"),
            ("show-play-btn", "true"),
            ("show-center-play-btn", "true"),
            ("enable-progress-gesture", "true"),
            ("object-fit", "'contain'"),
            ("poster", ""),
            ("show-mute-btn", "false"),
            ("title", ""),
            ("play-btn-position", "'bottom'"),
            ("enable-play-gesture", "false"),
            ("auto-pause-if-navigate", "true"),
            ("auto-pause-if-open-native", "true"),
            ("vslide-gesture", "false"),
            ("vslide-gesture-in-fullscreen", "true"),
            ("ad-unit-id", ""),
            ("bindPlay", ""),
            ("bindPause", ""),
            ("bindEnded", ""),
            ("bindTimeUpdate", ""),
            ("bindFullScreenChange", ""),
            ("bindWaiting", ""),
            ("bindError", ""),
            ("bindProgress", ""),
            ("bindLoadedMetadata", ""),
        ],
    },
    ComponentSchema {
        name: "Canvas",
        attributes: &[
            ("type", ""),
            ("canvas-id", ""),
            ("disable-scroll", "false"),
            ("bindTouchStart", ""),
            ("bindTouchMove", ""),
            ("bindTouchEnd", ""),
            ("bindTouchCancel", ""),
            ("bindLongtap", ""),
            ("bindError", ""),
        ],
    },
    ComponentSchema {
        name: "Ad",
        attributes: &[
            ("unit-id", ""),
            ("ad-intervals", ""),
            ("bindLoad", ""),
            ("bindError", ""),
            ("bindClose", ""),
        ],
    },
    ComponentSchema {
        name: "OfficialAccount",
        attributes: &[
            ("bindLoad", ""),
            ("bindError", ""),
        ],
    },
    ComponentSchema {
        name: "OpenData",
        attributes: &[
            ("type", ""),
            ("open-gid", ""),
            ("lang", "'en'"),
            ("default-text", ""),
            ("default-avatar", ""),
            ("bindError", ""),
        ],
    },
    ComponentSchema {
        name: "WebView",
        attributes: &[
            ("src", ""),
            ("bindMessage", ""),
            ("bindLoad", ""),
        ],
    },
    ComponentSchema {
        name: "NavigationBar",
        attributes: &[
            ("title", ""),
            ("loading", "false"),
            ("front-color", ""),
            ("background-color", ""),
            ("color-animation-duration", "0"),
            ("color-animation-timing-func", "'linear'"),
        ],
    },
    ComponentSchema {
        name: "PageMeta",
        attributes: &[
            ("background-text-style", ""),
            ("background-color", ""),
            ("background-color-top", ""),
            ("background-color-bottom", ""),
            ("scroll-top", "''"),
            ("scroll-duration", "300"),
            ("page-style", "''"),
            ("root-font-size", "''"),
            ("bindResize", ""),
            ("bindScroll", ""),
            ("bindScrollDone", ""),
        ],
    },
    ComponentSchema {
        name: "Block",
        attributes: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    
    #[test]
    fn test_component_names_unique() {
        let names: HashSet<_> = INTERNAL_COMPONENTS.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), INTERNAL_COMPONENTS.len());
    }
    
    #[test]
    fn test_attribute_names_unique() {
        for component in INTERNAL_COMPONENTS {
            let mut seen = HashSet::new();
            for (name, _) in component.attributes {
                assert!(seen.insert(*name), "{} declares `{}` twice", component.name, name);
            }
        }
    }
    
    #[test]
    fn test_block_has_no_attributes() {
        let block = INTERNAL_COMPONENTS.iter().find(|c| c.name == "Block").unwrap();
        assert!(block.attributes.is_empty());
    }
    
    #[test]
    fn test_view_carries_touch_events() {
        let view = &INTERNAL_COMPONENTS[0];
        assert_eq!(view.name, "View");
        assert!(view.attributes.contains(&("bindTouchMove", "")));
        assert!(view.attributes.contains(&("hover-class", "'none'")));
    }
    
    #[test]
    fn test_component_sets() {
        assert!(is_controlled("picker-view"));
        assert!(!is_controlled("view"));
        assert!(is_focus_component("editor"));
        assert!(!is_focus_component("slider"));
    }
}
