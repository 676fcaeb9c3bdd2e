//! Shared UI primitives for the retro desktop and the content pages.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the skin stylesheets. Skin-specific looks are driven by `data-ui-skin` on [`DesktopRoot`] and
//! per-primitive slot tokens, never by ad hoc class names in callers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, DesktopIconButton, DesktopIconGrid,
    DesktopRoot, DesktopWindowLayer, EmptyState, FieldVariant, Grid, Heading, LayoutAlign,
    LayoutGap, LayoutJustify, MenuBar, MenuItem, MenuSeparator, MenuSurface, Modal, ResizeHandle,
    SegmentedControl, SegmentedControlOption, Stack, Text, TextArea, TextField, TextRole,
    TextTone, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};
