//! The packet descriptor table.
//!
//! Ids, sizes, field names, bit masks, and group memberships are fixed by the
//! Open Interface hardware specification and must not change.

use super::{Descriptor, FlagDef};

static PACKET_7: Descriptor = Descriptor::flags(
    7,
    "Bumps and wheel drops",
    &[
        FlagDef {
            name: "wheel_drop_left",
            mask: 0b0000_1000,
        },
        FlagDef {
            name: "wheel_drop_right",
            mask: 0b0000_0100,
        },
        FlagDef {
            name: "bump_left",
            mask: 0b0000_0010,
        },
        FlagDef {
            name: "bump_right",
            mask: 0b0000_0001,
        },
    ],
);

static PACKET_8: Descriptor = Descriptor::flags(
    8,
    "Wall",
    &[FlagDef {
        name: "wall",
        mask: 0b0000_0001,
    }],
);

static PACKET_9: Descriptor = Descriptor::flags(
    9,
    "Cliff left",
    &[FlagDef {
        name: "cliff_left",
        mask: 0b0000_0001,
    }],
);

static PACKET_10: Descriptor = Descriptor::flags(
    10,
    "Cliff front left",
    &[FlagDef {
        name: "cliff_front_left",
        mask: 0b0000_0001,
    }],
);

static PACKET_11: Descriptor = Descriptor::flags(
    11,
    "Cliff front right",
    &[FlagDef {
        name: "cliff_front_right",
        mask: 0b0000_0001,
    }],
);

static PACKET_12: Descriptor = Descriptor::flags(
    12,
    "Cliff right",
    &[FlagDef {
        name: "cliff_right",
        mask: 0b0000_0001,
    }],
);

static PACKET_13: Descriptor = Descriptor::flags(
    13,
    "Virtual wall",
    &[FlagDef {
        name: "virtual_wall",
        mask: 0b0000_0001,
    }],
);

static PACKET_14: Descriptor = Descriptor::flags(
    14,
    "Wheel overcurrents",
    &[
        FlagDef {
            name: "left_wheel",
            mask: 0b0001_0000,
        },
        FlagDef {
            name: "right_wheel",
            mask: 0b0000_1000,
        },
        FlagDef {
            name: "main_brush",
            mask: 0b0000_0100,
        },
        FlagDef {
            name: "side_brush",
            mask: 0b0000_0001,
        },
    ],
);

static PACKET_15: Descriptor = Descriptor::unsigned_byte(15, "Dirt detect", "dirt_detect");
static PACKET_16: Descriptor = Descriptor::unsigned_byte(16, "Unused", "unused_byte");
static PACKET_17: Descriptor =
    Descriptor::unsigned_byte(17, "Infrared character omni", "ir_character_omni");

static PACKET_18: Descriptor = Descriptor::flags(
    18,
    "Buttons",
    &[
        FlagDef {
            name: "clock",
            mask: 0b1000_0000,
        },
        FlagDef {
            name: "schedule",
            mask: 0b0100_0000,
        },
        FlagDef {
            name: "day",
            mask: 0b0010_0000,
        },
        FlagDef {
            name: "hour",
            mask: 0b0001_0000,
        },
        FlagDef {
            name: "minute",
            mask: 0b0000_1000,
        },
        FlagDef {
            name: "dock",
            mask: 0b0000_0100,
        },
        FlagDef {
            name: "spot",
            mask: 0b0000_0010,
        },
        FlagDef {
            name: "clean",
            mask: 0b0000_0001,
        },
    ],
);

static PACKET_19: Descriptor = Descriptor::signed_word(19, "Distance", "distance");
static PACKET_20: Descriptor = Descriptor::signed_word(20, "Angle", "angle");
static PACKET_21: Descriptor = Descriptor::charging_state(21, "Charging state");
static PACKET_22: Descriptor = Descriptor::unsigned_word(22, "Voltage", "voltage");
static PACKET_23: Descriptor = Descriptor::signed_word(23, "Current", "current");
static PACKET_24: Descriptor = Descriptor::signed_byte(24, "Temperature", "temperature");
static PACKET_25: Descriptor = Descriptor::unsigned_word(25, "Battery charge", "battery_charge");
static PACKET_26: Descriptor =
    Descriptor::unsigned_word(26, "Battery capacity", "battery_capacity");
static PACKET_27: Descriptor = Descriptor::unsigned_word(27, "Wall signal", "wall_signal");
static PACKET_28: Descriptor =
    Descriptor::unsigned_word(28, "Cliff left signal", "cliff_left_signal");
static PACKET_29: Descriptor =
    Descriptor::unsigned_word(29, "Cliff front left signal", "cliff_front_left_signal");
static PACKET_30: Descriptor =
    Descriptor::unsigned_word(30, "Cliff front right signal", "cliff_front_right_signal");
static PACKET_31: Descriptor =
    Descriptor::unsigned_word(31, "Cliff right signal", "cliff_right_signal");
static PACKET_32: Descriptor = Descriptor::unsigned_byte(32, "Unused", "unused_byte");
static PACKET_33: Descriptor = Descriptor::unsigned_word(33, "Unused", "unused_short");

static PACKET_34: Descriptor = Descriptor::flags(
    34,
    "Charging sources available",
    &[
        FlagDef {
            name: "home_base",
            mask: 0b0000_0010,
        },
        FlagDef {
            name: "internal_charger",
            mask: 0b0000_0001,
        },
    ],
);

static PACKET_35: Descriptor = Descriptor::oi_mode(35, "OI mode");
static PACKET_36: Descriptor = Descriptor::unsigned_byte(36, "Song number", "song");

static PACKET_37: Descriptor = Descriptor::flags(
    37,
    "Song playing",
    &[FlagDef {
        name: "song_playing",
        mask: 0b0000_0001,
    }],
);

static PACKET_38: Descriptor =
    Descriptor::unsigned_byte(38, "Number of stream packets", "stream_packet_count");
static PACKET_39: Descriptor =
    Descriptor::signed_word(39, "Requested velocity", "requested_velocity");
static PACKET_40: Descriptor = Descriptor::signed_word(40, "Requested radius", "requested_radius");
static PACKET_41: Descriptor =
    Descriptor::signed_word(41, "Requested right velocity", "requested_right_velocity");
static PACKET_42: Descriptor =
    Descriptor::signed_word(42, "Requested left velocity", "requested_left_velocity");
static PACKET_43: Descriptor =
    Descriptor::unsigned_word(43, "Right encoder counts", "right_encoder_counts");
static PACKET_44: Descriptor =
    Descriptor::unsigned_word(44, "Left encoder counts", "left_encoder_counts");

static PACKET_45: Descriptor = Descriptor::flags(
    45,
    "Light bumper",
    &[
        FlagDef {
            name: "bumper_right",
            mask: 0b0010_0000,
        },
        FlagDef {
            name: "bumper_front_right",
            mask: 0b0001_0000,
        },
        FlagDef {
            name: "bumper_center_right",
            mask: 0b0000_1000,
        },
        FlagDef {
            name: "bumper_center_left",
            mask: 0b0000_0100,
        },
        FlagDef {
            name: "bumper_front_left",
            mask: 0b0000_0010,
        },
        FlagDef {
            name: "bumper_left",
            mask: 0b0000_0001,
        },
    ],
);

static PACKET_46: Descriptor =
    Descriptor::unsigned_word(46, "Light bump left signal", "bump_left_signal");
static PACKET_47: Descriptor =
    Descriptor::unsigned_word(47, "Light bump front left signal", "bump_front_left_signal");
static PACKET_48: Descriptor = Descriptor::unsigned_word(
    48,
    "Light bump center left signal",
    "bump_center_left_signal",
);
static PACKET_49: Descriptor = Descriptor::unsigned_word(
    49,
    "Light bump center right signal",
    "bump_center_right_signal",
);
static PACKET_50: Descriptor = Descriptor::unsigned_word(
    50,
    "Light bump front right signal",
    "bump_front_right_signal",
);
static PACKET_51: Descriptor =
    Descriptor::unsigned_word(51, "Light bump right signal", "bump_right_signal");
static PACKET_52: Descriptor =
    Descriptor::unsigned_byte(52, "Infrared character left", "ir_character_left");
static PACKET_53: Descriptor =
    Descriptor::unsigned_byte(53, "Infrared character right", "ir_character_right");
static PACKET_54: Descriptor =
    Descriptor::signed_word(54, "Left motor current", "left_motor_current");
static PACKET_55: Descriptor =
    Descriptor::signed_word(55, "Right motor current", "right_motor_current");
static PACKET_56: Descriptor =
    Descriptor::signed_word(56, "Main brush motor current", "main_brush_motor_current");
static PACKET_57: Descriptor =
    Descriptor::signed_word(57, "Side brush motor current", "side_brush_motor_current");

static PACKET_58: Descriptor = Descriptor::flags(
    58,
    "Stasis",
    &[FlagDef {
        name: "forward_progress",
        mask: 0b0000_0001,
    }],
);

static GROUP_0: Descriptor = Descriptor::group(
    0,
    "Group packet 0 (packets 7 to 26)",
    26,
    &[
        &PACKET_7, &PACKET_8, &PACKET_9, &PACKET_10, &PACKET_11, &PACKET_12, &PACKET_13,
        &PACKET_14, &PACKET_15, &PACKET_16, &PACKET_17, &PACKET_18, &PACKET_19, &PACKET_20,
        &PACKET_21, &PACKET_22, &PACKET_23, &PACKET_24, &PACKET_25, &PACKET_26,
    ],
);

static GROUP_1: Descriptor = Descriptor::group(
    1,
    "Group packet 1 (packets 7 to 16)",
    10,
    &[
        &PACKET_7, &PACKET_8, &PACKET_9, &PACKET_10, &PACKET_11, &PACKET_12, &PACKET_13,
        &PACKET_14, &PACKET_15, &PACKET_16,
    ],
);

static GROUP_2: Descriptor = Descriptor::group(
    2,
    "Group packet 2 (packets 17 to 20)",
    6,
    &[&PACKET_17, &PACKET_18, &PACKET_19, &PACKET_20],
);

static GROUP_3: Descriptor = Descriptor::group(
    3,
    "Group packet 3 (packets 21 to 26)",
    10,
    &[
        &PACKET_21, &PACKET_22, &PACKET_23, &PACKET_24, &PACKET_25, &PACKET_26,
    ],
);

static GROUP_4: Descriptor = Descriptor::group(
    4,
    "Group packet 4 (packets 27 to 34)",
    14,
    &[
        &PACKET_27, &PACKET_28, &PACKET_29, &PACKET_30, &PACKET_31, &PACKET_32, &PACKET_33,
        &PACKET_34,
    ],
);

static GROUP_5: Descriptor = Descriptor::group(
    5,
    "Group packet 5 (packets 35 to 42)",
    12,
    &[
        &PACKET_35, &PACKET_36, &PACKET_37, &PACKET_38, &PACKET_39, &PACKET_40, &PACKET_41,
        &PACKET_42,
    ],
);

static GROUP_6: Descriptor = Descriptor::group(
    6,
    "Group packet 6 (packets 7 to 42)",
    52,
    &[
        &PACKET_7, &PACKET_8, &PACKET_9, &PACKET_10, &PACKET_11, &PACKET_12, &PACKET_13,
        &PACKET_14, &PACKET_15, &PACKET_16, &PACKET_17, &PACKET_18, &PACKET_19, &PACKET_20,
        &PACKET_21, &PACKET_22, &PACKET_23, &PACKET_24, &PACKET_25, &PACKET_26, &PACKET_27,
        &PACKET_28, &PACKET_29, &PACKET_30, &PACKET_31, &PACKET_32, &PACKET_33, &PACKET_34,
        &PACKET_35, &PACKET_36, &PACKET_37, &PACKET_38, &PACKET_39, &PACKET_40, &PACKET_41,
        &PACKET_42,
    ],
);

static GROUP_100: Descriptor = Descriptor::group(
    100,
    "Group packet 100 (packets 7 to 58)",
    80,
    &[
        &PACKET_7, &PACKET_8, &PACKET_9, &PACKET_10, &PACKET_11, &PACKET_12, &PACKET_13,
        &PACKET_14, &PACKET_15, &PACKET_16, &PACKET_17, &PACKET_18, &PACKET_19, &PACKET_20,
        &PACKET_21, &PACKET_22, &PACKET_23, &PACKET_24, &PACKET_25, &PACKET_26, &PACKET_27,
        &PACKET_28, &PACKET_29, &PACKET_30, &PACKET_31, &PACKET_32, &PACKET_33, &PACKET_34,
        &PACKET_35, &PACKET_36, &PACKET_37, &PACKET_38, &PACKET_39, &PACKET_40, &PACKET_41,
        &PACKET_42, &PACKET_43, &PACKET_44, &PACKET_45, &PACKET_46, &PACKET_47, &PACKET_48,
        &PACKET_49, &PACKET_50, &PACKET_51, &PACKET_52, &PACKET_53, &PACKET_54, &PACKET_55,
        &PACKET_56, &PACKET_57, &PACKET_58,
    ],
);

static GROUP_101: Descriptor = Descriptor::group(
    101,
    "Group packet 101 (packets 43 to 58)",
    28,
    &[
        &PACKET_43, &PACKET_44, &PACKET_45, &PACKET_46, &PACKET_47, &PACKET_48, &PACKET_49,
        &PACKET_50, &PACKET_51, &PACKET_52, &PACKET_53, &PACKET_54, &PACKET_55, &PACKET_56,
        &PACKET_57, &PACKET_58,
    ],
);

static GROUP_106: Descriptor = Descriptor::group(
    106,
    "Group packet 106 (packets 46 to 51)",
    12,
    &[
        &PACKET_46, &PACKET_47, &PACKET_48, &PACKET_49, &PACKET_50, &PACKET_51,
    ],
);

static GROUP_107: Descriptor = Descriptor::group(
    107,
    "Group packet 107 (packets 54 to 58)",
    9,
    &[
        &PACKET_54, &PACKET_55, &PACKET_56, &PACKET_57, &PACKET_58,
    ],
);

/// Every packet the OI defines, in id order.
pub static DESCRIPTORS: &[&Descriptor] = &[
    &GROUP_0, &GROUP_1, &GROUP_2, &GROUP_3, &GROUP_4, &GROUP_5, &GROUP_6, &PACKET_7, &PACKET_8,
    &PACKET_9, &PACKET_10, &PACKET_11, &PACKET_12, &PACKET_13, &PACKET_14, &PACKET_15, &PACKET_16,
    &PACKET_17, &PACKET_18, &PACKET_19, &PACKET_20, &PACKET_21, &PACKET_22, &PACKET_23,
    &PACKET_24, &PACKET_25, &PACKET_26, &PACKET_27, &PACKET_28, &PACKET_29, &PACKET_30,
    &PACKET_31, &PACKET_32, &PACKET_33, &PACKET_34, &PACKET_35, &PACKET_36, &PACKET_37,
    &PACKET_38, &PACKET_39, &PACKET_40, &PACKET_41, &PACKET_42, &PACKET_43, &PACKET_44,
    &PACKET_45, &PACKET_46, &PACKET_47, &PACKET_48, &PACKET_49, &PACKET_50, &PACKET_51,
    &PACKET_52, &PACKET_53, &PACKET_54, &PACKET_55, &PACKET_56, &PACKET_57, &PACKET_58,
    &GROUP_100, &GROUP_101, &GROUP_106, &GROUP_107,
];

#[cfg(test)]
mod tests {
    use super::DESCRIPTORS;
    use crate::packets::{lookup, Layout};

    #[test]
    fn registry_covers_documented_ids() {
        let mut ids: Vec<u8> = DESCRIPTORS.iter().map(|d| d.id()).collect();
        ids.sort_unstable();
        let mut expected: Vec<u8> = (0..=58).collect();
        expected.extend([100, 101, 106, 107]);
        assert_eq!(ids, expected);
    }

    #[test]
    fn lookup_finds_every_descriptor() {
        for descriptor in DESCRIPTORS {
            let found = lookup(descriptor.id()).unwrap();
            assert_eq!(found.id(), descriptor.id());
            assert_eq!(found.size(), descriptor.size());
        }
    }

    #[test]
    fn atomic_sizes() {
        // Spot checks against the OI hardware specification.
        for (id, size) in [
            (7, 1),
            (15, 1),
            (18, 1),
            (19, 2),
            (21, 1),
            (22, 2),
            (24, 1),
            (35, 1),
            (45, 1),
            (51, 2),
            (58, 1),
        ] {
            assert_eq!(lookup(id).unwrap().size(), size, "packet {id}");
        }
    }

    #[test]
    fn group_sizes() {
        for (id, size) in [
            (0, 26),
            (1, 10),
            (2, 6),
            (3, 10),
            (4, 14),
            (5, 12),
            (6, 52),
            (100, 80),
            (101, 28),
            (106, 12),
            (107, 9),
        ] {
            assert_eq!(lookup(id).unwrap().size(), size, "group {id}");
        }
    }

    #[test]
    fn group_size_is_sum_of_constituents() {
        for descriptor in DESCRIPTORS {
            if let Layout::Group(members) = descriptor.layout() {
                let sum: usize = members.iter().map(|member| member.size()).sum();
                assert_eq!(sum, descriptor.size(), "group {}", descriptor.id());
            }
        }
    }

    #[test]
    fn group_members_are_registered_atoms() {
        for descriptor in DESCRIPTORS {
            if let Layout::Group(members) = descriptor.layout() {
                for member in *members {
                    let registered = lookup(member.id()).unwrap();
                    assert_eq!(registered.id(), member.id());
                    assert!(
                        !matches!(registered.layout(), Layout::Group(_)),
                        "group {} nests group {}",
                        descriptor.id(),
                        member.id()
                    );
                }
            }
        }
    }
}
