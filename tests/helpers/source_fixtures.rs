//! Common xorg.conf fixtures for tests.

use once_cell::sync::Lazy;

// Scenarios
pub const SCREEN_AND_DEVICE: &str = "Section \"Screen\"\n\tIdentifier \"Screen0\"\n\tDevice \"Device0\"\nEndSection\n\nSection \"Device\"\n\tIdentifier \"Device0\"\n\tDriver \"nvidia\"\nEndSection\n";

pub const SCREEN_WITH_BROKEN_DEVICE: &str = "Section \"Screen\"\n\tIdentifier \"Screen0\"\n\tDevice \"Device0\"\nEndSection\n\nSection \"Device\"\n\tIdentifier \"DeviceX\"\n\tDriver \"nvidia\"\nEndSection\n";

pub const DUPLICATE_DEVICES: &str = r#"
Section "Device"
	Identifier "Dev"
	Driver "nv"
EndSection

Section "Device"
	Identifier "Dev"
	Driver "nouveau"
EndSection
"#;

pub const BOOLEAN_OPTION: &str = "Section \"Device\"\n\tIdentifier \"D1\"\n\tOption \"Foo\"\nEndSection\n";

pub const BARE_WORD: &str = "Section \"Device\"\n\tIdentifier \"D1\"\n\tNoValue\nEndSection\n";

pub const DEVICE_ONLY: &str = "Section \"Device\"\n\tIdentifier \"Card0\"\n\tDriver \"intel\"\nEndSection\n";

// A complete configuration with comments, subsections and every kind of
// reference
pub const WORKSTATION: &str = r#"# xorg.conf written by a configuration tool
# keep the layout first

Section "ServerLayout"
	Identifier "Default Layout"
	Screen 0 "Screen0" 0 0
	InputDevice "Keyboard0" "CoreKeyboard"
	InputDevice "Mouse0" "CorePointer"
EndSection

Section "ServerFlags"
	Option "DefaultServerLayout" "Default Layout"
	Option "AutoAddDevices" "false"
EndSection

Section "Files"
	ModulePath "/usr/lib/xorg/modules"
	FontPath "/usr/share/fonts/X11/misc"
EndSection

Section "Module"
	Load "glx"
	Load "dri2"
EndSection

Section "InputDevice"
	Identifier "Keyboard0"
	Driver "kbd"
	Option "XkbLayout" "us"
EndSection

Section "InputDevice"
	Identifier "Mouse0"
	Driver "mouse"
	Option "Protocol" "auto"
	Option "Emulate3Buttons"
EndSection

Section "Monitor"
	Identifier "Monitor0"
	VendorName "Unknown"
	HorizSync 28.0 - 64.0
	VertRefresh 43.0 - 60.0
	# tuned by hand
EndSection

Section "Device"
	Identifier "Card0"
	Driver "radeon"
	BusID "PCI:1:0:0"
	Option "AccelMethod" "glamor"
EndSection

Section "Device"
	Identifier "Card1"
	Driver "intel"
EndSection

Section "Screen"
	Identifier "Screen0"
	Device "Card0"
	Monitor "Monitor0"
	DefaultDepth 24
	SubSection "Display"
		Depth 24
		Modes "1920x1080" "1280x1024"
		# fallback below
	EndSubSection
	SubSection "Display"
		Depth 16
	EndSubSection
EndSection
"#;

/// Parsed once and shared by read-only tests
pub static WORKSTATION_CONFIG: Lazy<xorgconf::XorgConfig> = Lazy::new(|| {
    match xorgconf::XorgConfig::parse(WORKSTATION) {
        Ok(config) => config,
        Err(err) => panic!("workstation fixture must parse: {err}"),
    }
});

// Legacy positional references: Device sections naming Screen by number
pub const LEGACY_POSITIONAL: &str = r#"
Section "Screen"
	Identifier "Screen0"
	Device "Card0"
EndSection

Section "Device"
	Identifier "Card0"
	Driver "nv"
	Screen 0
EndSection

Section "Device"
	Identifier "Card1"
	Driver "nv"
	Screen 1
EndSection
"#;
