mod tests {
    use myrtio_ws2812::color::Channel;
    use myrtio_ws2812::{ChannelOrder, ChannelOrderError};

    #[test]
    fn test_named_rgb_order_offsets() {
        let order = ChannelOrder::GRB;
        assert!(!order.has_white());
        assert_eq!(order.bytes_per_pixel(), 3);
        assert_eq!(order.offset(Channel::Green), Some(0));
        assert_eq!(order.offset(Channel::Red), Some(1));
        assert_eq!(order.offset(Channel::Blue), Some(2));
        assert_eq!(order.offset(Channel::White), None);
    }

    #[test]
    fn test_named_rgbw_order_offsets() {
        let order = ChannelOrder::BRWG;
        assert!(order.has_white());
        assert_eq!(order.bytes_per_pixel(), 4);
        assert_eq!(order.offset(Channel::Blue), Some(0));
        assert_eq!(order.offset(Channel::Red), Some(1));
        assert_eq!(order.offset(Channel::White), Some(2));
        assert_eq!(order.offset(Channel::Green), Some(3));
    }

    #[test]
    fn test_from_octal_infers_white() {
        assert_eq!(ChannelOrder::from_octal(0o2130), Ok(ChannelOrder::BRWG));
        assert_eq!(ChannelOrder::from_octal(0o1102), Ok(ChannelOrder::GRB));
        assert_eq!(ChannelOrder::from_octal(0o0012), Ok(ChannelOrder::RGB));
    }

    #[test]
    fn test_from_octal_rejects_duplicates() {
        assert_eq!(
            ChannelOrder::from_octal(0o0102),
            Err(ChannelOrderError { raw: 0o0102 })
        );
        assert!(ChannelOrder::try_from(0o0011u16).is_err());
        assert!(ChannelOrder::from_octal(0o0013).is_err());
    }

    #[test]
    fn test_new_with_explicit_white_flag() {
        assert_eq!(ChannelOrder::new(0o0102, false), Ok(ChannelOrder::GRB));
        assert_eq!(ChannelOrder::new(0o3012, true), Ok(ChannelOrder::RGBW));
        assert!(ChannelOrder::new(0o0012, true).is_err());
    }

    const NAMED: [ChannelOrder; 30] = [
        ChannelOrder::RGB,
        ChannelOrder::RBG,
        ChannelOrder::GRB,
        ChannelOrder::GBR,
        ChannelOrder::BRG,
        ChannelOrder::BGR,
        ChannelOrder::WRGB,
        ChannelOrder::WRBG,
        ChannelOrder::WGRB,
        ChannelOrder::WGBR,
        ChannelOrder::WBRG,
        ChannelOrder::WBGR,
        ChannelOrder::RWGB,
        ChannelOrder::RWBG,
        ChannelOrder::RGWB,
        ChannelOrder::RGBW,
        ChannelOrder::RBWG,
        ChannelOrder::RBGW,
        ChannelOrder::GWRB,
        ChannelOrder::GWBR,
        ChannelOrder::GRWB,
        ChannelOrder::GRBW,
        ChannelOrder::GBWR,
        ChannelOrder::GBRW,
        ChannelOrder::BWRG,
        ChannelOrder::BWGR,
        ChannelOrder::BRWG,
        ChannelOrder::BRGW,
        ChannelOrder::BGWR,
        ChannelOrder::BGRW,
    ];

    const NAMES: [&str; 30] = [
        "RGB",
        "RBG",
        "GRB",
        "GBR",
        "BRG",
        "BGR",
        "WRGB",
        "WRBG",
        "WGRB",
        "WGBR",
        "WBRG",
        "WBGR",
        "RWGB",
        "RWBG",
        "RGWB",
        "RGBW",
        "RBWG",
        "RBGW",
        "GWRB",
        "GWBR",
        "GRWB",
        "GRBW",
        "GBWR",
        "GBRW",
        "BWRG",
        "BWGR",
        "BRWG",
        "BRGW",
        "BGWR",
        "BGRW",
    ];

    #[test]
    fn test_named_orders_spell_wire_order() {
        for (order, name) in NAMED.iter().zip(NAMES) {
            let mut wire = vec!['?'; order.bytes_per_pixel()];
            for (channel, letter) in Channel::ALL.iter().zip(['W', 'R', 'G', 'B']) {
                if let Some(offset) = order.offset(*channel) {
                    wire[offset] = letter;
                }
            }
            assert_eq!(wire.iter().collect::<String>(), name);
        }
    }

    #[test]
    fn test_named_orders_are_permutations() {
        for order in NAMED {
            let width = order.bytes_per_pixel();
            let mut offsets: Vec<usize> = Channel::ALL
                .iter()
                .filter_map(|&channel| order.offset(channel))
                .collect();
            assert_eq!(offsets.len(), width, "{order:?}");

            offsets.sort_unstable();
            let expected: Vec<usize> = (0..width).collect();
            assert_eq!(offsets, expected, "{order:?}");
        }
    }

    #[test]
    fn test_named_orders_are_distinct() {
        for (i, a) in NAMED.iter().enumerate() {
            for b in &NAMED[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(NAMED.iter().filter(|order| order.has_white()).count(), 24);
    }

    #[test]
    fn test_octal_roundtrip_of_named_orders() {
        for order in NAMED {
            assert_eq!(ChannelOrder::from_octal(order.to_octal()), Ok(order));
            assert_eq!(
                ChannelOrder::new(order.to_octal(), order.has_white()),
                Ok(order)
            );
        }
    }

    #[test]
    fn test_default_is_grb() {
        assert_eq!(ChannelOrder::default(), ChannelOrder::GRB);
    }
}
