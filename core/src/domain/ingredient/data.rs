//! Static ingredient guide data, per 100 g.

use std::sync::LazyLock;

use crate::domain::catalogue::entities::Bilingual;
use crate::domain::ingredient::entities::{Ingredient, IngredientCategory, MacroBreakdown};

#[allow(clippy::too_many_arguments)]
fn ingredient(
    id: &str,
    name: (&str, &str),
    category: IngredientCategory,
    calories: f64,
    macros: (f64, f64, f64),
    beneficial_for: &[&str],
    harmful_for: &[&str],
    description: (&str, &str),
) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: Bilingual {
            en: name.0.to_string(),
            zh: name.1.to_string(),
        },
        category,
        calories,
        nutrients: MacroBreakdown {
            protein: macros.0,
            carbs: macros.1,
            fat: macros.2,
        },
        beneficial_for: beneficial_for.iter().map(|s| s.to_string()).collect(),
        harmful_for: harmful_for.iter().map(|s| s.to_string()).collect(),
        description: Bilingual {
            en: description.0.to_string(),
            zh: description.1.to_string(),
        },
    }
}

pub static INGREDIENTS: LazyLock<Vec<Ingredient>> = LazyLock::new(|| {
    use IngredientCategory::*;

    vec![
        // Grains & starches
        ingredient(
            "oats",
            ("Oats", "燕麦"),
            Grain,
            389.0,
            (16.9, 66.3, 6.9),
            &["diabetes_t2", "high_ldl", "hypertension", "fatty_liver_nafld"],
            &["gout"],
            (
                "High in soluble fiber (beta-glucan), excellent for lowering cholesterol and stabilizing blood sugar.",
                "富含可溶性膳食纤维（β-葡聚糖），非常适合降低胆固醇和稳定血糖。",
            ),
        ),
        ingredient(
            "white_rice",
            ("White Rice", "白米饭"),
            Grain,
            130.0,
            (2.7, 28.0, 0.3),
            &["ckd_3_5", "ibs"],
            &["diabetes_t2", "prediabetes", "fatty_liver_nafld"],
            (
                "High glycemic index. Can spike blood sugar quickly. Preferred for advanced kidney disease due to low potassium/phosphorus.",
                "高升糖指数食物，会导致血糖迅速升高。因钾磷含量低，适合晚期肾病患者食用。",
            ),
        ),
        ingredient(
            "brown_rice",
            ("Brown Rice", "糙米"),
            Grain,
            111.0,
            (2.6, 23.0, 0.9),
            &["diabetes_t2", "high_ldl", "hypertension"],
            &["ckd_3_5"],
            (
                "Whole grain rich in fiber and magnesium. Good for metabolic health but high in phosphorus for kidney patients.",
                "富含纤维和镁的全谷物。对代谢健康有益，但磷含量较高，肾病患者需慎用。",
            ),
        ),
        ingredient(
            "quinoa",
            ("Quinoa", "藜麦"),
            Grain,
            120.0,
            (4.4, 21.0, 1.9),
            &["diabetes_t2", "celiac"],
            &["ckd_3_5"],
            (
                "A complete protein and gluten-free grain. High in fiber and low glycemic index.",
                "富含完全蛋白的无麸质谷物。高纤维，低升糖指数。",
            ),
        ),
        ingredient(
            "bread_whole",
            ("Whole Wheat Bread", "全麦面包"),
            Grain,
            247.0,
            (13.0, 41.0, 3.4),
            &["diabetes_t2", "high_ldl"],
            &["celiac"],
            (
                "Rich in fiber and B vitamins. Better for blood sugar control than white bread.",
                "富含纤维和B族维生素。比白面包更有利于血糖控制。",
            ),
        ),
        ingredient(
            "corn",
            ("Corn", "玉米"),
            Grain,
            86.0,
            (3.2, 19.0, 1.2),
            &["celiac"],
            &["diabetes_t2"],
            (
                "A starchy vegetable/grain. Gluten-free. Moderate GI, portion control needed for diabetes.",
                "淀粉类蔬菜/谷物。无麸质。升糖指数适中，糖尿病患者需控制分量。",
            ),
        ),
        ingredient(
            "barley",
            ("Barley", "大麦"),
            Grain,
            354.0,
            (12.0, 73.0, 2.3),
            &["high_ldl", "diabetes_t2"],
            &["celiac"],
            (
                "Very high in fiber, particularly beta-glucan which lowers cholesterol. Contains gluten.",
                "富含纤维，特别是能降低胆固醇的β-葡聚糖。含有麸质。",
            ),
        ),
        ingredient(
            "millet",
            ("Millet", "小米"),
            Grain,
            378.0,
            (11.0, 73.0, 4.2),
            &["gerd", "celiac"],
            &["diabetes_t2"],
            (
                "Alkaline grain, easy to digest, good for stomach issues. High GI when cooked as soft porridge.",
                "碱性谷物，易消化，对胃部不适有益。煮成软粥时升糖指数较高。",
            ),
        ),
        ingredient(
            "buckwheat",
            ("Buckwheat", "荞麦"),
            Grain,
            343.0,
            (13.0, 71.0, 3.4),
            &["diabetes_t2", "hypertension", "celiac"],
            &[],
            (
                "Not wheat, gluten-free. Contains rutin which improves circulation and blood sugar.",
                "不是小麦，无麸质。含有芦丁，有助于改善血液循环和血糖。",
            ),
        ),
        // Proteins
        ingredient(
            "chicken_breast",
            ("Chicken Breast", "鸡胸肉"),
            Protein,
            165.0,
            (31.0, 0.0, 3.6),
            &["diabetes_t2", "fatty_liver_nafld", "high_ldl"],
            &["ckd_3_5"],
            (
                "Lean protein source, excellent for weight management and blood sugar control.",
                "瘦蛋白来源，非常适合体重管理和血糖控制。",
            ),
        ),
        ingredient(
            "salmon",
            ("Salmon", "三文鱼"),
            Protein,
            208.0,
            (20.0, 0.0, 13.0),
            &["high_triglycerides", "cad", "hypertension", "fatty_liver_nafld"],
            &[],
            (
                "Rich in Omega-3 fatty acids, highly beneficial for heart health and reducing inflammation.",
                "富含Omega-3脂肪酸，对心脏健康和减轻炎症非常有益。",
            ),
        ),
        ingredient(
            "tofu",
            ("Tofu", "豆腐"),
            Protein,
            76.0,
            (8.0, 1.9, 4.8),
            &["high_ldl", "diabetes_t2", "hypertension"],
            &["gout"],
            (
                "Plant-based protein, low in saturated fat. Contains isoflavones beneficial for heart health.",
                "植物蛋白，低饱和脂肪。含有对心脏健康有益的异黄酮。",
            ),
        ),
        ingredient(
            "egg",
            ("Egg", "鸡蛋"),
            Protein,
            155.0,
            (13.0, 1.1, 11.0),
            &["diabetes_t2"],
            &["high_ldl", "cad"],
            (
                "High quality protein and choline. Whites are safe for heart/kidney; yolks strictly limited for high cholesterol.",
                "优质蛋白和胆碱。蛋白对心脏/肾脏安全；高胆固醇患者需限制蛋黄。",
            ),
        ),
        ingredient(
            "beef_lean",
            ("Lean Beef", "瘦牛肉"),
            Protein,
            250.0,
            (26.0, 0.0, 15.0),
            &["pregnancy"],
            &["gout", "high_ldl", "cad", "fatty_liver_nafld"],
            (
                "Rich in Iron and B12. High in saturated fat and purines, limit intake for heart and gout.",
                "富含铁和B12。但饱和脂肪和嘌呤含量高，心脏病和痛风患者需限制摄入。",
            ),
        ),
        ingredient(
            "pork_tenderloin",
            ("Pork Tenderloin", "猪里脊"),
            Protein,
            143.0,
            (26.0, 0.0, 3.5),
            &["diabetes_t2"],
            &["gout", "high_ldl"],
            (
                "The leanest cut of pork, comparable to chicken breast. Good B-vitamins.",
                "猪肉中最瘦的部位，脂肪含量与鸡胸肉相当。富含B族维生素。",
            ),
        ),
        ingredient(
            "shrimp",
            ("Shrimp", "虾"),
            Protein,
            99.0,
            (24.0, 0.2, 0.3),
            &["diabetes_t2"],
            &["gout", "high_ldl", "allergy_seafood"],
            (
                "Very lean protein but high in dietary cholesterol and purines.",
                "极低脂蛋白，但膳食胆固醇和嘌呤含量较高。",
            ),
        ),
        ingredient(
            "tuna_canned",
            ("Tuna (Canned)", "金枪鱼(罐头)"),
            Protein,
            116.0,
            (26.0, 0.0, 1.0),
            &["diabetes_t2", "high_triglycerides"],
            &["pregnancy", "hypertension"],
            (
                "Convenient lean protein. Pregnant women should limit intake due to mercury. Watch sodium.",
                "方便的瘦蛋白。孕妇因汞含量应限制摄入。注意钠含量。",
            ),
        ),
        ingredient(
            "lentils",
            ("Lentils", "扁豆"),
            Protein,
            116.0,
            (9.0, 20.0, 0.4),
            &["diabetes_t2", "high_ldl", "fatty_liver_nafld"],
            &["gout", "ibs"],
            (
                "Excellent plant protein and high fiber. Lowers cholesterol and stabilizes blood sugar.",
                "极佳的植物蛋白和高纤维。降低胆固醇并稳定血糖。",
            ),
        ),
        ingredient(
            "chickpeas",
            ("Chickpeas", "鹰嘴豆"),
            Protein,
            164.0,
            (8.9, 27.0, 2.6),
            &["diabetes_t2", "high_ldl"],
            &["ibs"],
            (
                "High fiber and protein. Low GI. Can cause gas/bloating in IBS.",
                "高纤维和蛋白质。低升糖指数。IBS患者食用可能引起胀气。",
            ),
        ),
        ingredient(
            "edamame",
            ("Edamame", "毛豆"),
            Protein,
            121.0,
            (11.0, 10.0, 5.0),
            &["diabetes_t2", "high_ldl", "hypertension"],
            &[],
            (
                "Young soybeans. Complete plant protein, rich in fiber and antioxidants.",
                "年轻的黄豆。完全植物蛋白，富含纤维和抗氧化剂。",
            ),
        ),
        // Vegetables
        ingredient(
            "spinach",
            ("Spinach", "菠菜"),
            Vegetable,
            23.0,
            (2.9, 3.6, 0.4),
            &["hypertension", "diabetes_t2", "pregnancy"],
            &["gout", "ckd_3_5", "hyperkalemia"],
            (
                "Nutrient dense with iron and potassium. High in oxalates (bad for stones/gout) and potassium.",
                "营养丰富，含铁和钾。草酸含量高（对结石/痛风不利），钾含量高。",
            ),
        ),
        ingredient(
            "broccoli",
            ("Broccoli", "西兰花"),
            Vegetable,
            34.0,
            (2.8, 7.0, 0.4),
            &["fatty_liver_nafld", "diabetes_t2", "cad"],
            &["ibs"],
            (
                "Cruciferous vegetable that supports liver detoxification and has anti-inflammatory properties.",
                "十字花科蔬菜，支持肝脏排毒，具有抗炎特性。",
            ),
        ),
        ingredient(
            "cauliflower",
            ("Cauliflower", "花椰菜"),
            Vegetable,
            25.0,
            (1.9, 5.0, 0.3),
            &["diabetes_t2", "high_ldl"],
            &["ibs", "gout"],
            (
                "Low carb substitute for rice/potato. High in Vitamin C. Can cause gas (IBS).",
                "米饭/土豆的低碳水替代品。富含维生素C。可能引起胀气（IBS）。",
            ),
        ),
        ingredient(
            "potato",
            ("Potato", "土豆"),
            Vegetable,
            77.0,
            (2.0, 17.0, 0.1),
            &["hypertension"],
            &["diabetes_t2", "hyperkalemia"],
            (
                "High potassium source. High glycemic index if mashed or baked hot. Cooling increases resistant starch.",
                "高钾来源。如果热食（如土豆泥），升糖指数较高。冷却后会增加抗性淀粉。",
            ),
        ),
        ingredient(
            "sweet_potato",
            ("Sweet Potato", "红薯"),
            Vegetable,
            86.0,
            (1.6, 20.0, 0.1),
            &["diabetes_t2", "high_ldl"],
            &["ckd_3_5", "hyperkalemia"],
            (
                "Rich in beta-carotene and fiber. Lower GI than regular potatoes, but still requires portion control for diabetics.",
                "富含β-胡萝卜素和纤维。升糖指数低于普通土豆，但糖尿病患者仍需控制分量。",
            ),
        ),
        ingredient(
            "kale",
            ("Kale", "羽衣甘蓝"),
            Vegetable,
            49.0,
            (4.3, 8.8, 0.9),
            &["diabetes_t2", "high_ldl", "cad"],
            &["ckd_3_5", "hyperkalemia"],
            (
                "Superfood rich in Vitamin K, C, and antioxidants. High potassium is dangerous for advanced kidney disease.",
                "富含维生素K、C和抗氧化剂的超级食物。高钾对晚期肾病危险。",
            ),
        ),
        ingredient(
            "carrot",
            ("Carrot", "胡萝卜"),
            Vegetable,
            41.0,
            (0.9, 9.6, 0.2),
            &["high_ldl", "diabetes_t2"],
            &[],
            (
                "Rich in beta-carotene (Vitamin A). Good for eyes and heart. Cooked carrots have higher GI than raw.",
                "富含β-胡萝卜素（维生素A）。对眼睛和心脏有益。熟胡萝卜的升糖指数高于生胡萝卜。",
            ),
        ),
        ingredient(
            "tomato",
            ("Tomato", "番茄"),
            Vegetable,
            18.0,
            (0.9, 3.9, 0.2),
            &["cad", "high_ldl", "fatty_liver_nafld"],
            &["gerd", "gout", "hyperkalemia"],
            (
                "High in Lycopene (heart health). Acidic nature triggers GERD. High potassium.",
                "富含番茄红素（心脏健康）。酸性会诱发胃食管反流。钾含量高。",
            ),
        ),
        ingredient(
            "cucumber",
            ("Cucumber", "黄瓜"),
            Vegetable,
            15.0,
            (0.7, 3.6, 0.1),
            &["diabetes_t2", "hypertension", "gout"],
            &[],
            (
                "Very low calorie and hydrating. Good for weight loss and blood pressure.",
                "极低热量且补水。对减肥和血压控制有益。",
            ),
        ),
        ingredient(
            "eggplant",
            ("Eggplant", "茄子"),
            Vegetable,
            25.0,
            (1.0, 6.0, 0.2),
            &["diabetes_t2", "high_ldl"],
            &["gout"],
            (
                "High in anthocyanins (skin). Spongy texture absorbs oil easily, so steam or bake instead of frying.",
                "富含花青素（皮）。海绵状质地容易吸油，建议蒸或烤，避免油炸。",
            ),
        ),
        ingredient(
            "bell_pepper",
            ("Bell Pepper", "彩椒"),
            Vegetable,
            31.0,
            (1.0, 6.0, 0.3),
            &["diabetes_t2", "cad", "high_ldl"],
            &[],
            (
                "Extremely high in Vitamin C and antioxidants. Low calorie.",
                "维生素C和抗氧化剂含量极高。低热量。",
            ),
        ),
        ingredient(
            "onion",
            ("Onion", "洋葱"),
            Vegetable,
            40.0,
            (1.1, 9.0, 0.1),
            &["high_ldl", "hypertension", "diabetes_t2"],
            &["ibs", "gerd"],
            (
                "Contains quercetin (heart health). Major trigger for IBS (FODMAPs) and GERD.",
                "含有槲皮素（心脏健康）。IBS（FODMAPs）和胃食管反流的主要诱因。",
            ),
        ),
        ingredient(
            "garlic",
            ("Garlic", "大蒜"),
            Vegetable,
            149.0,
            (6.4, 33.0, 0.5),
            &["hypertension", "high_ldl", "cad"],
            &["ibs", "gerd"],
            (
                "Potent medicinal properties for heart and immunity. High FODMAP trigger for IBS.",
                "对心脏和免疫力有强效药用价值。IBS的高FODMAP诱因。",
            ),
        ),
        ingredient(
            "asparagus",
            ("Asparagus", "芦笋"),
            Vegetable,
            20.0,
            (2.2, 3.9, 0.1),
            &["diabetes_t2", "hypertension", "pregnancy"],
            &["gout"],
            (
                "Natural diuretic, high in folate. Moderate purine content requires caution for severe gout.",
                "天然利尿剂，富含叶酸。嘌呤含量中等，严重痛风患者需谨慎。",
            ),
        ),
        ingredient(
            "mushroom",
            ("Mushroom", "蘑菇"),
            Vegetable,
            22.0,
            (3.1, 3.3, 0.3),
            &["diabetes_t2", "high_ldl"],
            &["gout", "ibs"],
            (
                "Savory (umami) flavor, low calorie. Contains mannitol (polyol) which can affect IBS.",
                "鲜味（Umami），低热量。含有甘露醇（多元醇），可能影响IBS。",
            ),
        ),
        // Fruits
        ingredient(
            "apple",
            ("Apple", "苹果"),
            Fruit,
            52.0,
            (0.3, 14.0, 0.2),
            &["diabetes_t2", "high_ldl", "gout"],
            &["ibs"],
            (
                "Contains pectin (soluble fiber). \"An apple a day\" holds true for metabolic health.",
                "含有果胶（可溶性纤维）。对代谢健康非常有益。",
            ),
        ),
        ingredient(
            "banana",
            ("Banana", "香蕉"),
            Fruit,
            89.0,
            (1.1, 23.0, 0.3),
            &["hypertension"],
            &["hyperkalemia", "diabetes_t2"],
            (
                "Excellent potassium source for lowering blood pressure, but high in sugar/carbs.",
                "极佳的降血压钾来源，但糖分/碳水含量较高。",
            ),
        ),
        ingredient(
            "blueberries",
            ("Blueberries", "蓝莓"),
            Fruit,
            57.0,
            (0.7, 14.0, 0.3),
            &["diabetes_t2", "high_ldl", "hypertension", "fatty_liver_nafld"],
            &[],
            (
                "Powerhouse of antioxidants (anthocyanins). Improves insulin sensitivity and lowers blood pressure.",
                "抗氧化剂（花青素）的宝库。改善胰岛素敏感性并降低血压。",
            ),
        ),
        ingredient(
            "strawberries",
            ("Strawberries", "草莓"),
            Fruit,
            32.0,
            (0.7, 7.7, 0.3),
            &["diabetes_t2", "high_ldl", "gout"],
            &[],
            (
                "Low glycemic index fruit packed with Vitamin C. Excellent for diabetics.",
                "富含维生素C的低升糖指数水果。非常适合糖尿病患者。",
            ),
        ),
        ingredient(
            "orange",
            ("Orange", "橙子"),
            Fruit,
            47.0,
            (0.9, 12.0, 0.1),
            &["hypertension", "gout"],
            &["gerd", "hyperkalemia"],
            (
                "High Vitamin C helps lower uric acid (Gout). Acidic nature triggers GERD.",
                "高维生素C有助于降低尿酸（痛风）。酸性会诱发胃食管反流。",
            ),
        ),
        ingredient(
            "avocado",
            ("Avocado", "牛油果"),
            Fruit,
            160.0,
            (2.0, 8.5, 15.0),
            &["high_ldl", "metabolic_syndrome"],
            &["hyperkalemia", "fatty_liver_nafld"],
            (
                "Full of healthy monounsaturated fats. Very high in potassium.",
                "富含健康的单不饱和脂肪。钾含量非常高。",
            ),
        ),
        ingredient(
            "watermelon",
            ("Watermelon", "西瓜"),
            Fruit,
            30.0,
            (0.6, 8.0, 0.2),
            &["hypertension"],
            &["diabetes_t2", "hyperkalemia"],
            (
                "Very high glycemic index, spikes sugar fast. High water content, refreshing.",
                "升糖指数很高，血糖上升快。含水量高，清爽。",
            ),
        ),
        ingredient(
            "grapes",
            ("Grapes", "葡萄"),
            Fruit,
            69.0,
            (0.7, 18.0, 0.2),
            &["hypertension"],
            &["diabetes_t2", "ckd_3_5"],
            (
                "High in sugar. Contains resveratrol (skin). Portion control essential for diabetes.",
                "糖分高。含有白藜芦醇（皮）。糖尿病患者必须控制分量。",
            ),
        ),
        ingredient(
            "cherries",
            ("Cherries", "樱桃"),
            Fruit,
            50.0,
            (1.0, 12.0, 0.3),
            &["gout"],
            &["ibs"],
            (
                "Famous for lowering uric acid levels and preventing gout attacks.",
                "以降低尿酸水平和预防痛风发作而闻名。",
            ),
        ),
        ingredient(
            "pineapple",
            ("Pineapple", "菠萝"),
            Fruit,
            50.0,
            (0.5, 13.0, 0.1),
            &["cad"],
            &["diabetes_t2", "gerd"],
            (
                "Contains bromelain enzyme which aids digestion. Very sweet and acidic.",
                "含有有助于消化的菠萝蛋白酶。非常甜且酸。",
            ),
        ),
        // Dairy & alternatives
        ingredient(
            "yogurt",
            ("Greek Yogurt", "希腊酸奶"),
            Dairy,
            59.0,
            (10.0, 3.6, 0.4),
            &["diabetes_t2", "hypertension", "gout"],
            &["lactose_intolerance"],
            (
                "High protein, probiotics for gut health. Choose plain unsweetened varieties.",
                "高蛋白，含益生菌，有益肠道健康。请选择无糖原味。",
            ),
        ),
        ingredient(
            "milk",
            ("Milk", "牛奶"),
            Dairy,
            42.0,
            (3.4, 5.0, 1.0),
            &["gout", "hypertension"],
            &["lactose_intolerance", "ckd_3_5"],
            (
                "Good source of calcium and protein. Low-fat dairy helps excrete uric acid.",
                "钙和蛋白质的良好来源。低脂乳制品有助于排出尿酸。",
            ),
        ),
        ingredient(
            "cheese_cheddar",
            ("Cheddar Cheese", "切达干酪"),
            Dairy,
            402.0,
            (25.0, 1.3, 33.0),
            &[],
            &["hypertension", "high_ldl", "ckd_3_5"],
            (
                "High in calcium but also very high in saturated fat and sodium.",
                "富含钙，但饱和脂肪和钠含量也很高。",
            ),
        ),
        ingredient(
            "soy_milk",
            ("Soy Milk", "豆浆"),
            Dairy,
            33.0,
            (2.8, 1.8, 1.6),
            &["high_ldl", "lactose_intolerance"],
            &["gout"],
            (
                "Heart-healthy plant milk. Good protein. Choose unsweetened.",
                "有益心脏的植物奶。优质蛋白。请选择无糖。",
            ),
        ),
        ingredient(
            "almond_milk",
            ("Almond Milk", "杏仁奶"),
            Dairy,
            15.0,
            (0.5, 0.3, 1.1),
            &["diabetes_t2", "lactose_intolerance"],
            &[],
            (
                "Very low calorie and carb (if unsweetened). Low in protein compared to soy/dairy.",
                "极低热量和碳水（如果无糖）。蛋白质含量低于豆奶/牛奶。",
            ),
        ),
        // Nuts, oils & others
        ingredient(
            "walnuts",
            ("Walnuts", "核桃"),
            Other,
            654.0,
            (15.0, 14.0, 65.0),
            &["high_ldl", "cad", "diabetes_t2"],
            &["fatty_liver_nafld"],
            (
                "Rich in plant-based Omega-3s. Excellent for heart and brain health.",
                "富含植物性Omega-3。对心脏和大脑健康极佳。",
            ),
        ),
        ingredient(
            "almonds",
            ("Almonds", "杏仁"),
            Other,
            579.0,
            (21.0, 22.0, 50.0),
            &["diabetes_t2", "high_ldl"],
            &[],
            (
                "Packed with Vitamin E, magnesium, and healthy fats. Great for blood sugar.",
                "富含维生素E、镁和健康脂肪。对血糖非常有益。",
            ),
        ),
        ingredient(
            "olive_oil",
            ("Olive Oil", "橄榄油"),
            Other,
            884.0,
            (0.0, 0.0, 100.0),
            &["cad", "high_ldl", "hypertension", "fatty_liver_nafld"],
            &[],
            (
                "Cornerstone of Mediterranean diet. Anti-inflammatory and heart healthy.",
                "地中海饮食的基石。抗炎并有益心脏健康。",
            ),
        ),
        ingredient(
            "chia_seeds",
            ("Chia Seeds", "奇亚籽"),
            Other,
            486.0,
            (17.0, 42.0, 31.0),
            &["diabetes_t2", "high_ldl", "hypertension"],
            &[],
            (
                "Highest plant source of Omega-3. Forms a gel that slows digestion/sugar spikes.",
                "植物性Omega-3的最高来源。形成凝胶，减缓消化/血糖峰值。",
            ),
        ),
        ingredient(
            "dark_chocolate",
            ("Dark Chocolate", "黑巧克力"),
            Other,
            546.0,
            (4.9, 61.0, 31.0),
            &["hypertension", "cad"],
            &["gerd", "diabetes_t2"],
            (
                "Rich in flavanols (lowers BP). Choose >70% cocoa. Watch sugar content.",
                "富含黄烷醇（降低血压）。选择可可含量>70%。注意糖含量。",
            ),
        ),
        ingredient(
            "ginger",
            ("Ginger", "生姜"),
            Other,
            80.0,
            (1.8, 18.0, 0.8),
            &["gerd", "diabetes_t2", "cad"],
            &[],
            (
                "Powerful anti-inflammatory. Aids digestion and nausea.",
                "强效抗炎。有助于消化和恶心。",
            ),
        ),
        ingredient(
            "turmeric",
            ("Turmeric", "姜黄"),
            Other,
            312.0,
            (8.0, 65.0, 3.0),
            &["cad", "diabetes_t2", "fatty_liver_nafld"],
            &["gallstones"],
            (
                "Active compound Curcumin is a potent anti-inflammatory. Can prevent fat accumulation.",
                "活性化合物姜黄素是一种强效抗炎剂。可防止脂肪堆积。",
            ),
        ),
        ingredient(
            "coffee",
            ("Coffee", "咖啡"),
            Other,
            1.0,
            (0.1, 0.0, 0.0),
            &["gout", "fatty_liver_nafld", "diabetes_t2"],
            &["hypertension", "gerd"],
            (
                "Protective for liver and gout. Caffeine raises BP and triggers reflux.",
                "保护肝脏，对痛风有益。咖啡因会升高血压并诱发反流。",
            ),
        ),
        ingredient(
            "green_tea",
            ("Green Tea", "绿茶"),
            Other,
            1.0,
            (0.0, 0.0, 0.0),
            &["high_ldl", "diabetes_t2", "fatty_liver_nafld"],
            &["gerd"],
            (
                "Rich in EGCG catechin antioxidants. Boosts metabolism and liver health.",
                "富含EGCG儿茶素抗氧化剂。促进新陈代谢和肝脏健康。",
            ),
        ),
    ]
});
