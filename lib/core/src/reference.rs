//! Built-in product taxonomy
//!
//! Category order is the signature layout. Appending, removing or reordering
//! entries changes the taxonomy fingerprint and forces catalog re-encoding.

use crate::taxonomy::{Category, WeightTier};

pub(crate) fn reference_categories() -> Vec<Category> {
    vec![
        // Use cases that cut across product types
        Category::new(
            "activity",
            WeightTier::CrossCutting,
            [
                "running", "hiking", "cycling", "yoga", "gaming", "swimming", "training",
                "workout", "travel", "camping", "climbing", "skiing", "golf", "tennis",
                "basketball", "soccer", "fishing", "office", "wedding", "beach", "outdoor"
            ],
        ),
        // Primary product types
        Category::new(
            "shoes",
            WeightTier::ProductType,
            [
                "shoes", "footwear", "sneakers", "trainers", "loafers", "sandals", "heels",
                "flats", "slippers", "mules", "pumps", "wedges", "flip-flops", "boots",
                "espadrilles", "derbies", "oxfords", "brogues", "platforms", "running-shoes",
                "dress-shoes", "high-tops", "low-tops", "chukka-boots", "chelsea-boots", "clogs",
                "boat-shoes", "huaraches", "mary-janes", "moccasins", "athletic-shoes",
                "skate-shoes", "work-boots", "stilettos", "ballet-flats", "docksides",
                "sneaker-boots", "walking-shoes", "hiking-shoes", "water-shoes"
            ],
        ),
        Category::new(
            "camera",
            WeightTier::ProductType,
            [
                "camera", "dslr", "camcorder", "webcam", "lens", "tripod", "flash", "gopro",
                "drone", "action-camera", "mirrorless", "point-and-shoot", "instant-camera",
                "digital-camera", "film-camera", "security-camera", "dash-cam", "360-camera",
                "telescope", "microscope", "binoculars", "monocular", "cctv-camera", "spy-camera",
                "trail-camera", "video-camera", "surveillance-camera"
            ],
        ),
        Category::new(
            "laptop",
            WeightTier::ProductType,
            [
                "laptop", "notebook", "ultrabook", "chromebook", "macbook", "pc", "tablet",
                "monitor", "desktop", "all-in-one", "gaming-laptop", "netbook", "2-in-1",
                "convertible", "workstation", "server", "mainframe", "touchscreen-laptop"
            ],
        ),
        Category::new(
            "watch",
            WeightTier::ProductType,
            [
                "watch", "wristwatch", "smartwatch", "chronograph", "timepiece", "band",
                "fitness-tracker", "pocket-watch", "digital-watch", "analog-watch", "sports-watch",
                "dive-watch", "dress-watch", "pilot-watch", "field-watch", "automatic-watch",
                "quartz-watch", "solar-watch", "mechanical-watch", "smart-band"
            ],
        ),
        Category::new(
            "handbag",
            WeightTier::ProductType,
            [
                "handbag", "bag", "purse", "clutch", "tote", "satchel", "backpack",
                "messenger-bag", "hobo", "duffel", "fanny-pack", "briefcase", "wallet",
                "crossbody-bag", "shoulder-bag", "shopper", "luggage", "suitcase", "cosmetic-bag",
                "diaper-bag", "weekender", "trolley", "clutch-purse", "evening-bag", "bucket-bag",
                "doctor-bag"
            ],
        ),
        Category::new(
            "jacket",
            WeightTier::ProductType,
            [
                "jacket", "coat", "parka", "blazer", "cardigan", "anorak", "vest", "pullover",
                "windbreaker", "trench-coat", "overcoat", "hoodie", "bomber-jacket",
                "denim-jacket", "leather-jacket", "raincoat", "down-jacket", "puffer-jacket",
                "peacoat", "tuxedo-jacket", "suit-jacket", "varsity-jacket", "poncho", "cape",
                "kimono", "robe", "motorcycle-jacket", "track-jacket", "fleece-jacket",
                "field-jacket", "waistcoat"
            ],
        ),
        Category::new(
            "shirt",
            WeightTier::ProductType,
            [
                "shirt", "t-shirt", "polo-shirt", "blouse", "tunic", "top", "tank-top", "tank",
                "polo", "sweatshirt", "jersey", "henley", "dress-shirt", "button-down", "flannel",
                "crewneck-shirt", "v-neck-shirt", "long-sleeve-shirt", "short-sleeve-shirt",
                "halter-top", "tube-top", "crop-top", "bodysuit", "camisole", "shell-top",
                "graphic-tee", "raglan-shirt", "rugby-shirt", "henley-shirt", "cowl-neck",
                "mock-turtleneck"
            ],
        ),
        // Broad product families
        Category::new(
            "apparel",
            WeightTier::Family,
            [
                "jeans", "denim", "trousers", "leggings", "cargos", "chinos", "khakis", "slacks",
                "pants", "shorts", "skirt", "dress", "romper", "jumpsuit", "overalls", "suit",
                "blouse", "cardigan", "sweater", "hoodie", "miniskirt", "maxi-dress", "midi-skirt",
                "sundress", "sweatpants", "joggers", "culottes", "capris", "pajamas", "swimsuit",
                "bikini", "bra", "underwear", "socks", "stockings", "tie", "belt", "scarf",
                "gloves", "hat", "cap", "cravat", "tights"
            ],
        ),
        Category::new(
            "furniture",
            WeightTier::Family,
            [
                "table", "chair", "sofa", "bookshelf", "bed", "dresser", "nightstand", "desk",
                "ottoman", "cabinet", "wardrobe", "stool", "bench", "console", "lounge",
                "headboard", "mattress", "rug", "lamp", "mirror", "console-table", "coffee-table",
                "side-table", "pouf", "futon", "recliner", "chaise-lounge", "shelving",
                "bar-stool", "loveseat", "sectional", "armchair", "patio-furniture", "vanity",
                "buffet", "credenza", "hutch", "etagere", "chaise", "rocking-chair", "high-chair",
                "bean-bag", "hammock", "patio-set", "bar-cart"
            ],
        ),
        Category::new(
            "fitness",
            WeightTier::Family,
            [
                "mat", "dumbbells", "bands", "helmet", "bike", "treadmill", "roller", "rope",
                "barbell", "kettlebell", "weights", "gloves", "towel", "ball", "elliptical",
                "punching-bag", "yoga-block", "jump-rope", "resistance-bands", "stationary-bike",
                "rowing-machine", "workout-gloves", "gym-bag", "sports-bottle", "exercise-ball",
                "medicine-ball", "pull-up-bar", "ab-wheel", "squat-rack", "punching-gloves",
                "weight-bench", "spin-bike", "stair-climber", "yoga-strap", "bosu-ball"
            ],
        ),
        Category::new(
            "accessory",
            WeightTier::Family,
            [
                "belt", "necklace", "wallet", "backpack", "scarf", "sunglasses", "ring",
                "earrings", "bracelet", "hat", "cap", "gloves", "tie", "cufflinks", "keychain",
                "tie-clip", "anklet", "hair-pin", "brooch", "locket", "tie-tack", "bangle",
                "pendant", "choker", "studs", "hoops", "fedora", "beanie", "visor", "cravat",
                "ascot", "pocket-square", "suspenders", "cummerbund", "bow-tie", "headband",
                "earmuffs", "wristband", "lanyard", "charm"
            ],
        ),
        Category::new(
            "electronics",
            WeightTier::Family,
            [
                "headphones", "earbuds", "speaker", "laptop", "tablet", "camera", "keyboard",
                "mouse", "watch", "monitor", "phone", "printer", "webcam", "microphone", "drone",
                "smart-home", "router", "modem", "speakers", "earphones", "console", "e-reader",
                "power-bank", "charger", "projector", "hard-drive", "usb-drive", "smart-light",
                "smart-plug", "gaming-console", "tv", "radio", "blu-ray-player", "dvd-player",
                "fire-stick", "roku", "air-fryer", "coffee-maker", "toaster", "blender",
                "microwave", "smart-bulb", "smart-thermostat"
            ],
        ),
        Category::new(
            "kitchenware",
            WeightTier::Family,
            [
                "mug", "bottle", "cup", "plate", "bowl", "utensils", "glass", "fork", "spoon",
                "knife", "forks", "spoons", "knives", "dishes", "glasses", "tumbler", "pitcher",
                "carafe", "coaster", "napkin", "placemat", "ceramic", "porcelain", "tea-pot",
                "coffee-maker", "blender", "toaster", "microwave", "kettle", "pan", "pot",
                "cutting-board", "measuring-cups", "spatula", "whisk", "tongs", "ladle",
                "strainer", "colander", "can-opener", "wine-opener", "corkscrew", "grater",
                "peeler", "masher", "rolling-pin", "cookie-cutter", "muffin-tin", "baking-sheet",
                "saucepan", "frying-pan", "sieve", "food-processor", "mixer", "juicer", "griddle",
                "wok", "roaster"
            ],
        ),
        // Colors
        Category::new(
            "color",
            WeightTier::Color,
            [
                "red", "blue", "green", "black", "brown", "gray", "silver", "gold", "yellow",
                "orange", "purple", "pink", "cyan", "teal", "navy", "maroon", "beige", "cream",
                "indigo", "violet", "charcoal", "olive", "lime", "magenta", "turquoise",
                "lavender", "tan", "khaki", "ivory", "white", "monochrome", "multi-color",
                "two-tone", "ombre", "matte-black", "gloss-white", "fuchsia", "burgundy",
                "emerald", "sapphire", "tangerine", "coral", "mint", "peach", "mauve", "taupe",
                "ochre", "periwinkle", "crimson", "scarlet", "azure", "cobalt", "cerulean",
                "kelly-green", "forest-green", "hunter-green", "jet-black", "ebony",
                "chocolate-brown", "mocha", "platinum", "rose-gold", "lemon-yellow", "mustard",
                "burnt-orange", "plum", "lilac", "faded-pink", "hot-pink"
            ],
        ),
        // Generic attributes
        Category::new(
            "material",
            WeightTier::Attribute,
            [
                "denim", "leather", "wool", "cotton", "polyester", "satin", "knit", "wood",
                "metal", "plastic", "glass", "velvet", "corduroy", "silk", "linen", "suede",
                "mesh", "twill", "canvas", "spandex", "rayon", "nylon", "acrylic", "stone",
                "marble", "wicker", "rattan", "bamboo", "felt", "jute", "sequin", "lace",
                "neoprene", "terry-cloth", "chiffon", "georgette", "cashmere", "mohair", "velour",
                "lycra", "organza", "tweed", "flannel", "shearling", "crepe", "damask", "brocade",
                "tulle", "chambray", "grosgrain", "taffeta", "boucle", "chenille", "herringbone"
            ],
        ),
        Category::new(
            "pattern",
            WeightTier::Attribute,
            [
                "striped", "floral", "patterned", "solid", "plaid", "checkered", "gingham",
                "paisley", "logo", "abstract", "plain", "houndstooth", "polka-dot", "embossed",
                "embroidered", "quilted", "studded", "camouflage", "geometric", "animal-print",
                "tie-dye", "herringbone", "chevron", "argyle", "jacquard", "damask", "brocade",
                "toile", "dobby", "tartan", "leopard-print", "zebra-print", "ikat", "omnisphere",
                "swirls", "dots", "lines", "splatter", "graffiti", "marbled", "moiré",
                "seersucker", "pin-stripe", "pinstripe"
            ],
        ),
        Category::new(
            "style",
            WeightTier::Attribute,
            [
                "casual", "formal", "sporty", "minimalist", "vintage", "modern", "elegant",
                "rugged", "durable", "classic", "bohemian", "chic", "futuristic", "distressed",
                "faded", "sheer", "translucent", "streetwear", "athleisure", "preppy", "gothic",
                "industrial", "rustic", "mid-century", "scandinavian", "art-deco", "contemporary",
                "transitional", "traditional", "glam", "punk", "hippie", "goth", "emo", "skater",
                "biker", "rocker", "country", "western", "urban", "classic-retro", "avant-garde",
                "haute-couture"
            ],
        ),
        Category::new(
            "fit",
            WeightTier::Attribute,
            [
                "fitted", "loose", "baggy", "cropped", "oversized", "slim-fit", "loose-fit",
                "tapered", "flared", "straight-leg", "skinny", "high-waisted", "low-rise", "capri",
                "bootcut", "wide-leg", "relaxed-fit", "relaxed", "tailored", "bodycon", "flare",
                "bell-bottom", "pencil-skirt", "a-line", "trapeze", "shift", "empire-waist",
                "cinched-waist", "high-low"
            ],
        ),
        Category::new(
            "shape",
            WeightTier::Attribute,
            [
                "round", "square", "rectangular", "oval", "heart-shaped", "circular", "angular",
                "geometric", "curved", "straight", "asymmetrical", "triangular", "hexagonal",
                "octagonal", "cylindrical", "conical", "pyramidal", "domed", "globe", "sphere",
                "cube", "cone", "diamond-shaped", "tear-drop", "star-shaped", "crescent-shaped"
            ],
        ),
        Category::new(
            "features",
            WeightTier::Attribute,
            [
                "long-sleeved", "short-sleeved", "crewneck", "v-neck", "hooded", "collared",
                "zipper", "button", "pockets", "lace-up", "buckle", "velcro", "snap", "drawstring",
                "platform-sole", "wedge-heel", "block-heel", "stiletto", "high-top", "low-top",
                "mid-top", "cuffed", "ribbed", "pleated", "ruched", "sequined", "hood", "pocket",
                "button-up", "zip-up", "drawstring-waist", "elastic-waist", "wide-leg",
                "straight-leg", "sleeveless", "strapless", "off-the-shoulder", "one-shoulder",
                "cap-sleeve", "kimono-sleeve", "batwing-sleeve", "cut-outs", "embellishments",
                "fringe", "tassels", "beaded", "studded", "embroidered", "appliques", "patchwork",
                "grommets", "zippers", "vents"
            ],
        ),
        Category::new(
            "finish",
            WeightTier::Attribute,
            [
                "shiny", "matte", "glossy", "distressed", "faded", "perforated", "sheer",
                "translucent", "stainless-steel", "carbon-fiber", "laminated", "matte-black",
                "gloss-white", "brushed-metal", "chrome-finish", "brushed-finish", "matte-finish",
                "glossy-finish", "polished", "lacquered", "powder-coated", "textured", "smooth",
                "reflective", "iridescent", "satin-finish", "high-gloss", "low-gloss", "embossed",
                "etched", "engraved", "carved", "sanded", "varnished", "painted", "enameled",
                "anodized", "electroplated", "hand-painted", "hand-carved"
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Taxonomy;

    #[test]
    fn test_reference_taxonomy_is_valid() {
        let taxonomy = Taxonomy::reference().unwrap();
        assert_eq!(taxonomy.len(), reference_categories().len());
        assert!(taxonomy.keyword_count() > 500);
    }

    #[test]
    fn test_reference_tiers() {
        let taxonomy = Taxonomy::reference().unwrap();
        assert_eq!(taxonomy.weight_of("activity"), Some(4.0));
        assert_eq!(taxonomy.weight_of("shoes"), Some(3.0));
        assert_eq!(taxonomy.weight_of("furniture"), Some(2.0));
        assert_eq!(taxonomy.weight_of("color"), Some(1.5));
        assert_eq!(taxonomy.weight_of("finish"), Some(1.0));
    }

    #[test]
    fn test_every_tier_is_used() {
        let taxonomy = Taxonomy::reference().unwrap();
        for tier in [
            WeightTier::CrossCutting,
            WeightTier::ProductType,
            WeightTier::Family,
            WeightTier::Color,
            WeightTier::Attribute,
        ] {
            assert!(taxonomy.categories().iter().any(|c| c.tier() == tier), "{:?}", tier);
        }
    }
}
